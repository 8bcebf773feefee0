use holonet::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::controller::user::{
        create_user, delete_user, get_all_users, get_user, get_user_favorites, update_user,
    },
};

use super::*;

/// Expect 200 OK when listing users
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("luke@tatooine.net")
        .build()
        .await?;

    let result = get_all_users(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 Created when creating a user with a new email
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.app_state()),
        Json(CreateUserDto {
            email: "luke@tatooine.net".to_string(),
            password: "password".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request when the email is already registered
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("luke@tatooine.net")
        .build()
        .await?;

    let result = create_user(
        State(test.app_state()),
        Json(CreateUserDto {
            email: "luke@tatooine.net".to_string(),
            password: "password".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a user not present in table
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let get_resp = get_user(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::NOT_FOUND);

    let update_resp = update_user(
        State(test.app_state()),
        Path(1),
        Json(UpdateUserDto::default()),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(update_resp.status(), StatusCode::NOT_FOUND);

    let delete_resp = delete_user(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(delete_resp.status(), StatusCode::NOT_FOUND);

    let favorites_resp = get_user_favorites(State(test.app_state()), Path(1))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(favorites_resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK when updating & deleting an existing user
#[tokio::test]
async fn updates_and_deletes_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("luke@tatooine.net")
        .build()
        .await?;

    let update_resp = update_user(
        State(test.app_state()),
        Path(1),
        Json(UpdateUserDto {
            password: Some("new password".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(update_resp.status(), StatusCode::OK);

    let delete_resp = delete_user(State(test.app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(delete_resp.status(), StatusCode::OK);

    Ok(())
}
