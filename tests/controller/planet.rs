use holonet::{
    model::planet::UpdatePlanetDto,
    server::controller::planet::{
        create_planet, delete_planet, get_all_planets, get_planet, update_planet,
    },
};

use crate::util::mock::mock_create_planet_dto;

use super::*;

/// Expect 201 Created when creating a planet
#[tokio::test]
async fn creates_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_planet(
        State(test.app_state()),
        Json(mock_create_planet_dto(
            "Hoth",
            "https://swapi.dev/api/planets/4/",
        )),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request when the url is blank
#[tokio::test]
async fn rejects_blank_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_planet(
        State(test.app_state()),
        Json(mock_create_planet_dto("Hoth", " ")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when listing planets & getting a planet by summary ID
#[tokio::test]
async fn gets_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let list_resp = get_all_planets(State(test.app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(list_resp.status(), StatusCode::OK);

    let get_resp = get_planet(State(test.app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a planet not present in table
#[tokio::test]
async fn returns_not_found_for_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let get_resp = get_planet(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::NOT_FOUND);

    let update_resp = update_planet(
        State(test.app_state()),
        Path(1),
        Json(UpdatePlanetDto::default()),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(update_resp.status(), StatusCode::NOT_FOUND);

    let delete_resp = delete_planet(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(delete_resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK when updating & deleting an existing planet
#[tokio::test]
async fn updates_and_deletes_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let update_resp = update_planet(
        State(test.app_state()),
        Path(1),
        Json(UpdatePlanetDto {
            population: Some("120000".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(update_resp.status(), StatusCode::OK);

    let delete_resp = delete_planet(State(test.app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(delete_resp.status(), StatusCode::OK);

    Ok(())
}
