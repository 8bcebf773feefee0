use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0:?} not found in database")]
    UserNotFound(i32),
    #[error("A user with email {0:?} already exists")]
    EmailTaken(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::EmailTaken(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "User already exists")
            }
        }
    }
}
