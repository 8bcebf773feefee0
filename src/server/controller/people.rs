use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        people::{CreatePersonDto, PeopleDto, PersonDto, UpdatePersonDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::Error,
        model::app::AppState,
        service::catalog::person::PersonService,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// Get the summaries of all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PeopleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).list_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Create a person along with its people summary
///
/// # Responses
/// - 201 (Created): Person & summary created
/// - 400 (Bad Request): Blank name or url, or another person already uses the name or url
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 400, description = "Name or url is invalid or already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonDto>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db).create_person(payload).await?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// Get the detailed person of a people summary
///
/// # Responses
/// - 200 (OK): Detailed person
/// - 404 (Not Found): No people summary with the ID, or the summary has no detailed person
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the people summary")),
    responses(
        (status = 200, description = "Success when retrieving person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db).get_person(id).await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Update a detailed person and the name & url of its summary
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the detailed person")),
    request_body = UpdatePersonDto,
    responses(
        (status = 200, description = "Person updated", body = PersonDto),
        (status = 400, description = "Name or url is invalid or already used", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePersonDto>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db)
        .update_person(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Delete a detailed person, its summary and the favorites on it
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the detailed person")),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PersonService::new(&state.db).delete_person(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Person deleted"))))
}
