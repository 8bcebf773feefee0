//! Fixtures inserting test records into the database.
//!
//! - `factory` - Active models filled with mock values
//! - `user` - Users
//! - `catalog` - Detailed people & planets along with their summaries
//! - `favorite` - Favorites linking users to summaries

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
