//! Error types for the holonet server.
//!
//! This module provides the error handling system of the API with specialized error types
//! per domain (users, catalog, favorites, configuration). All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for ergonomic error definitions with automatic
//! `Display` and `Error` trait implementations.

pub mod catalog;
pub mod config;
pub mod favorite;
pub mod retry;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, config::ConfigError, favorite::FavoriteError, user::UserError,
    },
};

/// Main error type for the holonet server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (invalid environment variable values)
/// - User errors (unknown user, email already registered)
/// - Catalog errors (unknown people/planets, name or url already in use)
/// - Favorite errors (unknown favorite, duplicate favorite)
/// - Validation errors (request payload rejected before any write)
/// - External library errors (database, socket binding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// User account error (unknown user ID, duplicate email).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// People & planets catalog error.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Favorites error.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Request payload failed validation, nothing was written.
    #[error("Invalid request: {0}")]
    ValidationError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Database and IO errors are treated as internal server errors (500) with logging.
///
/// # Returns
/// - 400 Bad Request - For validation failures and conflicts (duplicate email, name, favorite)
/// - 404 Not Found - For missing users, catalog entries or favorites
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::ValidationError(reason) => {
                tracing::debug!("Rejected request payload: {}", reason);

                error_response(StatusCode::BAD_REQUEST, reason)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `{"error": ...}` response with the provided status code.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    #[test]
    fn maps_validation_error_to_bad_request() {
        let resp = Error::ValidationError("email is required".to_string()).into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn hides_database_errors_behind_internal_server_error() {
        let resp = Error::DbErr(sea_orm::DbErr::Custom("boom".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn hides_io_errors_behind_internal_server_error() {
        let resp = Error::IoError(std::io::Error::other("address in use")).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn maps_missing_user_to_not_found() {
        let resp = Error::from(UserError::UserNotFound(1)).into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
