//! REST API for the calculator service.
//!
//! Split the same way as the other HTTP surfaces in this codebase:
//! DTOs, error mapping, handlers, and route registration.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, OperationRequest, OperationResponse};
pub use error::{ApiError, ValidationError, ValidationViolation};
pub use routes::router;
