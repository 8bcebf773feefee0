//! Service layer for business logic.
//!
//! Services validate requests, coordinate repositories inside database transactions and run
//! their database work through the [`retry::RetryContext`]. They include user management, the
//! people & planets catalog with its detail/summary synchronization, and favorites.

pub mod catalog;
pub mod favorite;
pub mod retry;
pub mod user;
