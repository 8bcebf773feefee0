use holonet::{
    model::favorite::FavoriteRequestDto,
    server::controller::favorite::{
        create_people_favorite, create_planet_favorite, delete_people_favorite,
        delete_planet_favorite, get_all_favorites,
    },
};

use super::*;

/// Expect 201 Created when favoriting a planet & a person
#[tokio::test]
async fn creates_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_person("Han Solo")
        .with_planet("Alderaan")
        .build()
        .await?;

    let planet_resp = create_planet_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(planet_resp.status(), StatusCode::CREATED);

    let people_resp = create_people_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(people_resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 Not Found when the user or the summary doesn't exist
#[tokio::test]
async fn returns_not_found_for_missing_user_or_summary() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_planet("Alderaan")
        .build()
        .await?;

    let missing_user_resp = create_planet_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 2 }),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(missing_user_resp.status(), StatusCode::NOT_FOUND);

    let missing_people_resp = create_people_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(missing_people_resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 Bad Request when favoriting the same planet twice
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_planet("Alderaan")
        .with_planet_favorite(1, 1)
        .build()
        .await?;

    let result = create_planet_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when deleting existing favorites, 404 once they are gone
#[tokio::test]
async fn deletes_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_person("Han Solo")
        .with_planet("Alderaan")
        .with_planet_favorite(1, 1)
        .with_people_favorite(1, 1)
        .build()
        .await?;

    let planet_resp = delete_planet_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(planet_resp.status(), StatusCode::OK);

    let people_resp = delete_people_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(people_resp.status(), StatusCode::OK);

    let missing_resp = delete_planet_favorite(
        State(test.app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(missing_resp.status(), StatusCode::NOT_FOUND);

    let list_resp = get_all_favorites(State(test.app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(list_resp.status(), StatusCode::OK);

    Ok(())
}
