use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors of the people & planets catalog.
///
/// Summary lookups (`PeopleNotFound`, `PlanetsNotFound`) are keyed by summary ID, detailed
/// lookups by detailed record ID. `DetailedPersonNotFound` & `DetailedPlanetNotFound` occur when
/// a summary exists but no detailed record backs it.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("People summary ID {0:?} not found in database")]
    PeopleNotFound(i32),
    #[error("Person ID {0:?} not found in database")]
    PersonNotFound(i32),
    #[error("People summary ID {0:?} has no detailed person record")]
    DetailedPersonNotFound(i32),
    #[error("Planets summary ID {0:?} not found in database")]
    PlanetsNotFound(i32),
    #[error("Planet ID {0:?} not found in database")]
    PlanetNotFound(i32),
    #[error("Planets summary ID {0:?} has no detailed planet record")]
    DetailedPlanetNotFound(i32),
    #[error("Name {name:?} or url {url:?} is already used by another catalog entry")]
    SummaryTaken { name: String, url: String },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::PeopleNotFound(_) | Self::PersonNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Person not found")
            }
            Self::DetailedPersonNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Detailed Person not found")
            }
            Self::PlanetsNotFound(_) | Self::PlanetNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Planet not found")
            }
            Self::DetailedPlanetNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Detailed Planet not found")
            }
            Self::SummaryTaken { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Name or url is already used by another entry",
            ),
        }
    }
}
