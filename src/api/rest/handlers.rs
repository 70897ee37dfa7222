//! Request handlers for the calculator API.
//!
//! Each handler is a thin adapter: the custom `OperationRequest` extractor has
//! already validated the body by the time a handler runs, so all that is left
//! is dispatching to the domain service and shaping the response.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde_json::{Value, json};

use crate::api::rest::dto::{OperationRequest, OperationResponse};
use crate::api::rest::error::ApiError;
use crate::domain::{CalcService, Operation};

/// Embedded calculator page served at `/`.
const INDEX_HTML: &str = include_str!("../../../assets/index.html");

fn evaluate(
    service: &CalcService,
    op: Operation,
    req: OperationRequest,
) -> Result<Json<OperationResponse>, ApiError> {
    let result = service.apply(op, req.a, req.b).map_err(|e| {
        tracing::error!(operation = op.as_str(), error = %e, "operation failed");
        ApiError::from(e)
    })?;
    Ok(Json(OperationResponse { result }))
}

/// Add two numbers.
#[utoipa::path(
    post,
    path = "/add",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Sum of a and b", body = OperationResponse),
        (status = 400, description = "Validation failure", body = crate::api::rest::dto::ErrorResponse),
    )
)]
pub async fn add(
    State(service): State<CalcService>,
    req: OperationRequest,
) -> Result<Json<OperationResponse>, ApiError> {
    evaluate(&service, Operation::Add, req)
}

/// Subtract the second number from the first.
#[utoipa::path(
    post,
    path = "/subtract",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Difference of a and b", body = OperationResponse),
        (status = 400, description = "Validation failure", body = crate::api::rest::dto::ErrorResponse),
    )
)]
pub async fn subtract(
    State(service): State<CalcService>,
    req: OperationRequest,
) -> Result<Json<OperationResponse>, ApiError> {
    evaluate(&service, Operation::Subtract, req)
}

/// Multiply two numbers.
#[utoipa::path(
    post,
    path = "/multiply",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Product of a and b", body = OperationResponse),
        (status = 400, description = "Validation failure", body = crate::api::rest::dto::ErrorResponse),
    )
)]
pub async fn multiply(
    State(service): State<CalcService>,
    req: OperationRequest,
) -> Result<Json<OperationResponse>, ApiError> {
    evaluate(&service, Operation::Multiply, req)
}

/// Divide the first number by the second.
#[utoipa::path(
    post,
    path = "/divide",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Quotient of a and b", body = OperationResponse),
        (status = 400, description = "Division by zero or validation failure", body = crate::api::rest::dto::ErrorResponse),
    )
)]
pub async fn divide(
    State(service): State<CalcService>,
    req: OperationRequest,
) -> Result<Json<OperationResponse>, ApiError> {
    evaluate(&service, Operation::Divide, req)
}

/// Liveness probe for orchestration.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is alive"))
)]
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Serve the calculator web UI.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
