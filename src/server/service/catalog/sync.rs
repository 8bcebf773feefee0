//! Detail/summary synchronization.
//!
//! A summary record mirrors the `name` & `url` of exactly one detailed record and references
//! it through a unique foreign key. [`SummarySync`] implements the rules once for any
//! [`SummaryRepository`]:
//!
//! - `sync`: after creating a detailed record, create its summary or overwrite the existing one
//! - `refresh`: after updating a detailed record, overwrite its summary if one exists
//! - `remove`: before deleting a detailed record, delete its summary & the favorites on it
//!
//! The repository is expected to run on the same transaction as the detailed record write.

use crate::server::{
    data::catalog::SummaryRepository,
    error::{catalog::CatalogError, Error},
};

/// Keeps the summaries of one catalog kind in step with their detailed records.
pub struct SummarySync<R: SummaryRepository> {
    repo: R,
}

impl<R: SummaryRepository> SummarySync<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fails if a summary other than the one of `detail_id` already uses the name or url.
    ///
    /// # Returns
    /// - `Ok(())` - Name & url are free for the detailed record
    /// - `Err(Error::CatalogError(SummaryTaken))` - Another summary uses the name or url
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn ensure_available(
        &self,
        name: &str,
        url: &str,
        detail_id: i32,
    ) -> Result<(), Error> {
        if self
            .repo
            .find_conflicting(name, url, detail_id)
            .await?
            .is_some()
        {
            return Err(CatalogError::SummaryTaken {
                name: name.to_string(),
                url: url.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Creates the summary of a detailed record, or overwrites the name & url of its
    /// existing summary.
    pub async fn sync(
        &self,
        name: String,
        url: String,
        detail_id: i32,
    ) -> Result<R::Model, Error> {
        self.ensure_available(&name, &url, detail_id).await?;

        let summary = match self.repo.find_by_detail_id(detail_id).await? {
            Some(summary) => self.repo.update_name_and_url(summary, name, url).await?,
            None => self.repo.create(name, url, detail_id).await?,
        };

        Ok(summary)
    }

    /// Overwrites the name & url of the summary of a detailed record.
    ///
    /// # Returns
    /// - `Ok(Some(summary))` - The summary was updated
    /// - `Ok(None)` - The detailed record has no summary, nothing was written
    /// - `Err(Error::CatalogError(SummaryTaken))` - Another summary uses the name or url
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn refresh(
        &self,
        name: String,
        url: String,
        detail_id: i32,
    ) -> Result<Option<R::Model>, Error> {
        let Some(summary) = self.repo.find_by_detail_id(detail_id).await? else {
            return Ok(None);
        };

        self.ensure_available(&name, &url, detail_id).await?;

        Ok(Some(self.repo.update_name_and_url(summary, name, url).await?))
    }

    /// Deletes the summary of a detailed record along with every favorite referencing it.
    ///
    /// Returns whether a summary existed.
    pub async fn remove(&self, detail_id: i32) -> Result<bool, Error> {
        match self.repo.find_by_detail_id(detail_id).await? {
            Some(summary) => {
                self.repo.delete(summary).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
