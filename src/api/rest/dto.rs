//! REST DTOs for the calculator API.
//!
//! `OperationRequest` deliberately does not rely on the default JSON
//! extractor: the body is parsed as loose JSON first and validated field by
//! field, so the error message enumerates exactly which operand is missing or
//! not a number. Validation always runs before any arithmetic.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::api::rest::error::{ApiError, ValidationError, ValidationViolation};

/// Request body for all arithmetic endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OperationRequest {
    /// The first operand.
    #[schema(example = 10.0)]
    pub a: f64,
    /// The second operand.
    #[schema(example = 5.0)]
    pub b: f64,
}

/// Response body for a successful operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    /// The computed result.
    #[schema(example = 15.0)]
    pub result: f64,
}

/// Response body for a failed operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[schema(example = "Cannot divide by zero!")]
    pub error: String,
}

impl OperationRequest {
    /// Validate a loose JSON value into a typed request.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] listing every offending field when the
    /// body is not an object or an operand is missing or non-numeric.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let Some(obj) = value.as_object() else {
            return Err(ValidationError::single(
                "body",
                "value is not a valid object",
            ));
        };

        let mut violations = Vec::new();
        let a = extract_operand(obj, "a", &mut violations);
        let b = extract_operand(obj, "b", &mut violations);

        match (a, b) {
            (Some(a), Some(b)) if violations.is_empty() => Ok(Self { a, b }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

/// Pull one operand out of the request object, recording a violation when it
/// is absent, not a JSON number, or does not map to a finite `f64`.
fn extract_operand(
    obj: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<ValidationViolation>,
) -> Option<f64> {
    let Some(value) = obj.get(field) else {
        violations.push(ValidationViolation::new(field, "field required"));
        return None;
    };

    match value.as_f64() {
        Some(n) if n.is_finite() => Some(n),
        Some(_) => {
            violations.push(ValidationViolation::new(
                field,
                "value is not a finite number",
            ));
            None
        }
        None => {
            violations.push(ValidationViolation::new(
                field,
                "value is not a valid number",
            ));
            None
        }
    }
}

impl<S> FromRequest<S> for OperationRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::from(ValidationError::single("body", rejection.body_text()))
            })?;
        Ok(Self::from_value(&value)?)
    }
}
