//! Calculator HTTP service.
//!
//! A small JSON API over four arithmetic operations, plus an embedded web UI
//! that calls the same endpoints from a browser. The domain layer is a pure,
//! stateless service; the REST layer validates requests before any arithmetic
//! runs and maps every failure to a `400 {"error": ...}` response.

pub mod api;
pub mod bootstrap;
pub mod domain;
