use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {user_id:?} has no favorite for planet summary ID {planet_id:?}")]
    PlanetFavoriteNotFound { user_id: i32, planet_id: i32 },
    #[error("User ID {user_id:?} has no favorite for people summary ID {people_id:?}")]
    PeopleFavoriteNotFound { user_id: i32, people_id: i32 },
    #[error("User ID {user_id:?} already favorited planet summary ID {planet_id:?}")]
    PlanetAlreadyFavorited { user_id: i32, planet_id: i32 },
    #[error("User ID {user_id:?} already favorited people summary ID {people_id:?}")]
    PeopleAlreadyFavorited { user_id: i32, people_id: i32 },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::PlanetFavoriteNotFound { .. } | Self::PeopleFavoriteNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, "Favorite not found")
            }
            Self::PlanetAlreadyFavorited { .. } | Self::PeopleAlreadyFavorited { .. } => {
                error_response(StatusCode::BAD_REQUEST, "Favorite already exists")
            }
        }
    }
}
