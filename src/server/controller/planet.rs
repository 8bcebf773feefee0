use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, PlanetsDto, UpdatePlanetDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::Error,
        model::app::AppState,
        service::catalog::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// Get the summaries of all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Create a planet along with its planets summary
///
/// # Responses
/// - 201 (Created): Planet & summary created
/// - 400 (Bad Request): Blank name or url, or another planet already uses the name or url
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Name or url is invalid or already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create_planet(payload).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Get the detailed planet of a planets summary
///
/// # Responses
/// - 200 (OK): Detailed planet
/// - 404 (Not Found): No planets summary with the ID, or the summary has no detailed planet
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planets summary")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Update a detailed planet and the name & url of its summary
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the detailed planet")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Planet updated", body = PlanetDto),
        (status = 400, description = "Name or url is invalid or already used", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db)
        .update_planet(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a detailed planet, its summary and the favorites on it
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the detailed planet")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete_planet(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Planet deleted"))))
}
