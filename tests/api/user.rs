use super::*;

/// Expect a created user to be listed without its password
#[tokio::test]
async fn creates_and_lists_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = send(
        test.app(),
        json_request(
            "POST",
            "/users",
            Some(json!({ "email": "luke@tatooine.net", "password": "password" })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = read_json(resp).await;
    assert_eq!(created["email"], "luke@tatooine.net");
    assert_eq!(created["is_active"], true);
    assert!(created.get("password").is_none());

    let resp = send(test.app(), json_request("GET", "/users", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let users = read_json(resp).await;
    assert_eq!(users.as_array().map(|users| users.len()), Some(1));

    Ok(())
}

/// Expect 404 with an `error` payload for an unknown user
#[tokio::test]
async fn returns_error_payload_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = send(test.app(), json_request("GET", "/users/99", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

/// Expect 400 when the email is not an address
#[tokio::test]
async fn rejects_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = send(
        test.app(),
        json_request(
            "POST",
            "/users",
            Some(json!({ "email": "luke", "password": "password" })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect a deleted user's favorites to be removed alongside the user
#[tokio::test]
async fn deletes_user_with_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_planet("Alderaan")
        .with_planet_favorite(1, 1)
        .build()
        .await?;

    let resp = send(test.app(), json_request("DELETE", "/users/1", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "User deleted");

    let resp = send(test.app(), json_request("GET", "/favorites", None)).await;
    let favorites = read_json(resp).await;
    assert_eq!(favorites, json!([]));

    Ok(())
}
