//! Error mapping for the REST layer.
//!
//! Every failure is surfaced to the caller as `{"error": "<message>"}` with an
//! HTTP 400; nothing is retried and nothing is fatal to the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::rest::dto::ErrorResponse;
use crate::domain::CalcError;

/// A single failed field in a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolation {
    pub field: String,
    pub message: String,
}

impl ValidationViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Request validation failure enumerating the offending field(s).
///
/// Rendered as `"<field>: <message>"`, multiple violations joined with `"; "`,
/// e.g. `"a: field required; b: value is not a valid number"`.
#[derive(Debug, Clone)]
pub struct ValidationError {
    violations: Vec<ValidationViolation>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for v in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    #[must_use]
    pub fn new(violations: Vec<ValidationViolation>) -> Self {
        Self { violations }
    }

    /// Shorthand for a single-field failure.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationViolation::new(field, message)])
    }

    #[must_use]
    pub fn violations(&self) -> &[ValidationViolation] {
        &self.violations
    }
}

/// Error type for REST handlers.
///
/// Exactly two kinds exist: validation failures (rejected before any
/// arithmetic runs) and domain errors from the computation itself.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Calc(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
