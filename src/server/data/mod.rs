//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same operations run on a
//! pooled connection or inside a transaction, which the services use to keep detailed and
//! summary catalog records consistent.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod tests;
