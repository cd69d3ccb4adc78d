// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

use articles_api::application::{ports::HealthCheckPort, services::ApplicationServices};
use articles_api::domain::article::ArticleRepository;
use articles_api::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    HttpState::new(Arc::new(ApplicationServices::new(repo)))
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo))
}

pub fn make_test_router_with_health(
    repo: Arc<dyn ArticleRepository>,
    health_check: Arc<HealthCheckPort>,
) -> axum::Router {
    build_router(build_test_state(repo).with_health_check(health_check))
}

pub fn make_test_router_with_timeout(
    repo: Arc<dyn ArticleRepository>,
    request_timeout: Duration,
) -> axum::Router {
    build_router(build_test_state(repo).with_request_timeout(request_timeout))
}

pub fn json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through the router and decode the JSON response.
pub async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and message.
pub fn assert_error_body(
    status: StatusCode,
    body: &Value,
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status, "unexpected body: {body}");
    let err_field = body.get("error").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_message, "unexpected error field: {body}");
}
