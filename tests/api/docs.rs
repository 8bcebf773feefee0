use super::*;

/// Expect the OpenAPI document to list the catalog routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(test.app(), json_request("GET", "/api/docs/openapi.json", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = read_json(resp).await;
    assert!(doc["paths"].get("/people/{id}").is_some());
    assert!(doc["paths"].get("/favorite/planet/{planet_id}").is_some());

    Ok(())
}
