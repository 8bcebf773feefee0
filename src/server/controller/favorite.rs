use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteDto, FavoriteRequestDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get the favorites of every user
#[utoipa::path(
    get,
    path = "/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_all_favorites().await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Favorite a planet for a user
///
/// # Responses
/// - 201 (Created): Favorite created
/// - 400 (Bad Request): The user already favorited the planet
/// - 404 (Not Found): User or planets summary not found
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planets summary")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Planet already favorited", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet_favorite(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(payload): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .create_planet_favorite(payload.user_id, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove the favorite a user holds on a planet
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planets summary")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet_favorite(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(payload): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .delete_planet_favorite(payload.user_id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite deleted"))))
}

/// Favorite a person for a user
///
/// # Responses
/// - 201 (Created): Favorite created
/// - 400 (Bad Request): The user already favorited the person
/// - 404 (Not Found): User or people summary not found
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "ID of the people summary")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Person already favorited", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_people_favorite(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    Json(payload): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .create_people_favorite(payload.user_id, people_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove the favorite a user holds on a person
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(("people_id" = i32, Path, description = "ID of the people summary")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_people_favorite(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    Json(payload): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .delete_people_favorite(payload.user_id, people_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite deleted"))))
}
