//! Request and response bodies of the HTTP API.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
