//! Helpers shared by the integration tests.

pub mod mock;

use axum::{body::Body, http::Request, response::Response, Router};
use holonet::server::{model::app::AppState, router};
use holonet_test_utils::TestContext;
use tower::ServiceExt;

/// Extension trait for TestContext to build the application state & router
pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn app(&self) -> Router {
        router::routes().with_state(self.app_state())
    }
}

/// Sends a single request through the full router
pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request)
        .await
        .expect("router should not fail to produce a response")
}

/// Builds a request with an optional JSON body
pub fn json_request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Reads a response body as JSON
pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
