#![allow(clippy::unwrap_used, clippy::expect_used)]

//! REST API integration tests for the calculator service.
//!
//! These tests drive the real router (the same one `run_server` binds) via
//! `tower::ServiceExt::oneshot` and verify:
//! 1. The wire contract of all four arithmetic endpoints
//! 2. Validation failures are rejected before computation with field-level messages
//! 3. Division by zero returns the fixed error body
//! 4. The web UI, health probe, and OpenAPI document are served

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use calc_server::api::rest;
use calc_server::bootstrap::config::ApiConfig;
use calc_server::domain::CalcService;

fn app() -> Router {
    rest::router(CalcService::new(), &ApiConfig::default())
}

async fn post_json(path: &str, body: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn get(path: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn add_returns_sum() {
    let (status, body) = post_json("/add", r#"{"a": 10, "b": 5}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), 15.0);
}

#[tokio::test]
async fn add_handles_floats() {
    let (status, body) = post_json("/add", r#"{"a": 0.1, "b": 0.2}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!((body["result"].as_f64().unwrap() - 0.3).abs() < 1e-10);
}

#[tokio::test]
async fn subtract_returns_difference() {
    let (status, body) = post_json("/subtract", r#"{"a": 10, "b": 5}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), 5.0);
}

#[tokio::test]
async fn subtract_handles_negative_results() {
    let (status, body) = post_json("/subtract", r#"{"a": 3, "b": 10}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), -7.0);
}

#[tokio::test]
async fn multiply_returns_product() {
    let (status, body) = post_json("/multiply", r#"{"a": 10, "b": 5}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), 50.0);
}

#[tokio::test]
async fn divide_returns_float_quotient() {
    let (status, body) = post_json("/divide", r#"{"a": 10, "b": 2}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), 5.0);

    let (status, body) = post_json("/divide", r#"{"a": 7, "b": 2}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), 3.5);
}

#[tokio::test]
async fn divide_by_zero_returns_fixed_error() {
    let (status, body) = post_json("/divide", r#"{"a": 10, "b": 0}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot divide by zero!");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn missing_operand_is_a_validation_error() {
    let (status, body) = post_json("/add", r#"{"b": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "a: field required");

    let (status, body) = post_json("/multiply", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "a: field required; b: field required");
}

#[tokio::test]
async fn non_numeric_operand_is_a_validation_error() {
    let (status, body) = post_json("/add", r#"{"a": "ten", "b": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "a: value is not a valid number");

    // Validation runs before arithmetic: divide never sees the zero divisor
    let (status, body) = post_json("/divide", r#"{"a": "ten", "b": 0}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "a: value is not a valid number");
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let (status, body) = post_json("/add", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("body:"));

    let (status, body) = post_json("/add", "[1, 2]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "body: value is not a valid object");
}

#[tokio::test]
async fn index_serves_calculator_page() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Calculator"));
}

#[tokio::test]
async fn health_reports_liveness() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "calc-server");
}

#[tokio::test]
async fn openapi_document_is_served_when_docs_enabled() {
    let response = get("/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/divide"].is_object());
}

#[tokio::test]
async fn openapi_document_is_absent_when_docs_disabled() {
    let config = ApiConfig {
        enable_docs: false,
        ..ApiConfig::default()
    };
    let response = rest::router(CalcService::new(), &config)
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get("/power").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_on_operation_route_is_method_not_allowed() {
    let response = get("/add").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
