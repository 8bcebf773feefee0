//! HTTP controller endpoints for the holonet web API.
//!
//! This module contains Axum handlers for users, the people & planets catalog and favorites.
//! Controllers extract path & body parameters, call the matching service and map the result
//! into an HTTP response. Errors are converted by [`crate::server::error::Error`]'s
//! `IntoResponse` implementation. Every handler carries a utoipa OpenAPI annotation.

pub mod extract;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
