use holonet::{
    model::people::UpdatePersonDto,
    server::controller::people::{
        create_person, delete_person, get_all_people, get_person, update_person,
    },
};

use crate::util::mock::mock_create_person_dto;

use super::*;

/// Expect 201 Created when creating a person
#[tokio::test]
async fn creates_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_person(
        State(test.app_state()),
        Json(mock_create_person_dto(
            "Luke Skywalker",
            "https://swapi.dev/api/people/1/",
        )),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request when the name is blank or already used
#[tokio::test]
async fn rejects_invalid_or_taken_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_person("Luke Skywalker")
        .build()
        .await?;

    let blank_resp = create_person(
        State(test.app_state()),
        Json(mock_create_person_dto("", "https://swapi.dev/api/people/2/")),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(blank_resp.status(), StatusCode::BAD_REQUEST);

    let taken_resp = create_person(
        State(test.app_state()),
        Json(mock_create_person_dto(
            "Luke Skywalker",
            "https://swapi.dev/api/people/2/",
        )),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(taken_resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when listing people & getting a person by summary ID
#[tokio::test]
async fn gets_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_person("Luke Skywalker")
        .build()
        .await?;

    let list_resp = get_all_people(State(test.app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(list_resp.status(), StatusCode::OK);

    let get_resp = get_person(State(test.app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a person not present in table
#[tokio::test]
async fn returns_not_found_for_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let get_resp = get_person(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::NOT_FOUND);

    let update_resp = update_person(
        State(test.app_state()),
        Path(1),
        Json(UpdatePersonDto::default()),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(update_resp.status(), StatusCode::NOT_FOUND);

    let delete_resp = delete_person(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(delete_resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK when updating & deleting an existing person
#[tokio::test]
async fn updates_and_deletes_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_person("Luke Skywalker")
        .build()
        .await?;

    let update_resp = update_person(
        State(test.app_state()),
        Path(1),
        Json(UpdatePersonDto {
            hair_color: Some("brown".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(update_resp.status(), StatusCode::OK);

    let delete_resp = delete_person(State(test.app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(delete_resp.status(), StatusCode::OK);

    Ok(())
}
