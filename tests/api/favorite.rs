use super::*;

/// Expect a planet favorite to be created, listed & removed through the router
#[tokio::test]
async fn favorites_planet_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("luke@tatooine.net")
        .with_user("leia@alderaan.net")
        .with_user("han@corellia.net")
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .with_planet("Yavin IV")
        .with_planet("Hoth")
        .with_planet("Dagobah")
        .build()
        .await?;

    let resp = send(
        test.app(),
        json_request("POST", "/favorite/planet/5", Some(json!({ "user_id": 3 }))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let favorite = read_json(resp).await;
    assert_eq!(favorite["user_id"], 3);
    assert_eq!(favorite["planet_id"], 5);
    assert!(favorite["people_id"].is_null());

    let resp = send(test.app(), json_request("GET", "/users/3/favorites", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([favorite]));

    let resp = send(
        test.app(),
        json_request("DELETE", "/favorite/planet/5", Some(json!({ "user_id": 3 }))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Favorite deleted");

    let resp = send(test.app(), json_request("GET", "/favorites", None)).await;
    assert_eq!(read_json(resp).await, json!([]));

    Ok(())
}

/// Expect a second favorite for the same person to be rejected
#[tokio::test]
async fn rejects_duplicate_people_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_person("Han Solo")
        .build()
        .await?;

    let request = || json_request("POST", "/favorite/people/1", Some(json!({ "user_id": 1 })));

    let resp = send(test.app(), request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(test.app(), request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect 400 with an `error` payload when the body is sent without a JSON content-type
#[tokio::test]
async fn rejects_body_without_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_planet("Alderaan")
        .build()
        .await?;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/favorite/planet/1")
        .body(axum::body::Body::from(r#"{"user_id": 1}"#))
        .unwrap();

    let resp = send(test.app(), request).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(resp).await["error"].is_string());

    Ok(())
}
