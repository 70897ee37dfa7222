//! Domain layer for the calculator service.
//!
//! Contains the pure arithmetic logic, independent of any transport.

pub mod service;

pub use service::{CalcError, CalcService, Operation};
