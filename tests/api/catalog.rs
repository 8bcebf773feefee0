use chrono::NaiveDateTime;

use super::*;

/// Expect a created person to be readable through its summary with ISO-8601 timestamps
#[tokio::test]
async fn creates_person_and_reads_it_back() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = send(
        test.app(),
        json_request(
            "POST",
            "/people",
            Some(json!({
                "name": "Luke",
                "url": "http://x/1",
                "birth_year": "19BBY",
                "eye_color": "blue",
                "gender": "male",
                "hair_color": "blond",
                "height": "172",
                "homeworld": "http://x/planets/1",
                "mass": "77",
                "skin_color": "fair",
            })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;

    let resp = send(test.app(), json_request("GET", "/people", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let people = read_json(resp).await;
    assert_eq!(people[0]["name"], "Luke");
    assert_eq!(people[0]["url"], "http://x/1");
    assert_eq!(people[0]["person_id"], created["id"]);

    let resp = send(test.app(), json_request("GET", "/people/1", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let person = read_json(resp).await;
    assert_eq!(person["id"], created["id"]);
    assert_eq!(person["name"], "Luke");
    assert_eq!(person["birth_year"], "19BBY");
    assert_eq!(person["films"], json!([]));

    let created_at = person["created_at"].as_str().unwrap_or_default();
    assert!(created_at.parse::<NaiveDateTime>().is_ok());

    Ok(())
}

/// Expect a renamed planet to be reflected in its summary
#[tokio::test]
async fn updates_planet_summary() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = send(
        test.app(),
        json_request("PUT", "/planets/1", Some(json!({ "name": "Tatooine Prime" }))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["name"], "Tatooine Prime");

    let resp = send(test.app(), json_request("GET", "/planets", None)).await;
    let planets = read_json(resp).await;
    assert_eq!(planets[0]["name"], "Tatooine Prime");

    Ok(())
}

/// Expect a deleted person to leave neither summary nor detail behind
#[tokio::test]
async fn deletes_person_and_summary() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_person("Han Solo")
        .build()
        .await?;

    let resp = send(test.app(), json_request("DELETE", "/people/1", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Person deleted");

    let resp = send(test.app(), json_request("GET", "/people", None)).await;
    assert_eq!(read_json(resp).await, json!([]));

    let resp = send(test.app(), json_request("GET", "/people/1", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 with an `error` payload for a body missing required fields
#[tokio::test]
async fn rejects_incomplete_person_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = send(
        test.app(),
        json_request(
            "POST",
            "/people",
            Some(json!({ "name": "Luke", "url": "http://x/1" })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(resp).await["error"].is_string());

    let resp = send(test.app(), json_request("GET", "/people", None)).await;
    assert_eq!(read_json(resp).await, json!([]));

    Ok(())
}

/// Expect 400 with an `error` payload for a non-numeric id
#[tokio::test]
async fn rejects_non_numeric_planet_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = send(test.app(), json_request("GET", "/planets/hoth", None)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(resp).await["error"].is_string());

    Ok(())
}
