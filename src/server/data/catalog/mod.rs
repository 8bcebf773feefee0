//! People & planets catalog repositories.
//!
//! The catalog stores each entry twice: a detailed record (`person`, `planet`) and a summary
//! record (`people`, `planets`) carrying the name, url and a unique back-reference to the
//! detailed record. The [`SummaryRepository`] trait is the seam the synchronizer uses to keep
//! either kind of summary in step with its detailed record.

pub mod people;
pub mod person;
pub mod planet;
pub mod planets;

use std::future::Future;

use sea_orm::DbErr;

/// Operations on a summary table keyed by the ID of the detailed record it mirrors.
pub trait SummaryRepository {
    /// Database model of the summary table.
    type Model: Send;

    /// Gets the summary mirroring the provided detailed record ID
    fn find_by_detail_id(
        &self,
        detail_id: i32,
    ) -> impl Future<Output = Result<Option<Self::Model>, DbErr>> + Send;

    /// Gets a summary using the provided name or url which does not mirror `detail_id`
    fn find_conflicting(
        &self,
        name: &str,
        url: &str,
        detail_id: i32,
    ) -> impl Future<Output = Result<Option<Self::Model>, DbErr>> + Send;

    /// Creates a summary mirroring the provided detailed record
    fn create(
        &self,
        name: String,
        url: String,
        detail_id: i32,
    ) -> impl Future<Output = Result<Self::Model, DbErr>> + Send;

    /// Overwrites the name & url of an existing summary
    fn update_name_and_url(
        &self,
        summary: Self::Model,
        name: String,
        url: String,
    ) -> impl Future<Output = Result<Self::Model, DbErr>> + Send;

    /// Deletes a summary along with every favorite referencing it
    fn delete(&self, summary: Self::Model) -> impl Future<Output = Result<(), DbErr>> + Send;
}
