//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET|POST /users`, `GET|PUT|DELETE /users/{user_id}`, `GET /users/{user_id}/favorites`
/// - `GET|POST /people`, `GET|PUT|DELETE /people/{id}`
/// - `GET|POST /planets`, `GET|PUT|DELETE /planets/{id}`
/// - `GET /favorites`
/// - `POST|DELETE /favorite/planet/{planet_id}`, `POST|DELETE /favorite/people/{people_id}`
///
/// The `GET` routes of `/people/{id}` & `/planets/{id}` take a summary ID while `PUT` & `DELETE`
/// take the ID of the detailed record.
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "holonet", description = "Star Wars catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User account routes"),
        (name = controller::people::PEOPLE_TAG, description = "People catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planets catalog routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_all_users, controller::user::create_user))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::people::get_all_people, controller::people::create_person))
        .routes(routes!(
            controller::people::get_person,
            controller::people::update_person,
            controller::people::delete_person
        ))
        .routes(routes!(controller::planet::get_all_planets, controller::planet::create_planet))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::favorite::get_all_favorites))
        .routes(routes!(
            controller::favorite::create_planet_favorite,
            controller::favorite::delete_planet_favorite
        ))
        .routes(routes!(
            controller::favorite::create_people_favorite,
            controller::favorite::delete_people_favorite
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
