//! Domain service for arithmetic operations.
//!
//! All operations work over `f64`: one consistent numeric representation
//! instead of per-operation integer/float coercion rules. Division by zero is
//! the single domain error; everything else is plain arithmetic.

use tracing::debug;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The divisor was zero. The message is part of the API contract.
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Stable name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

/// Domain service that performs arithmetic operations.
///
/// Stateless and side-effect free: the same inputs always produce the same
/// output, so it can be shared across request handlers without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalcService;

impl CalcService {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a` and return the difference.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers and return the product.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b` and return the quotient.
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] when `b` is zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Apply an operation to two operands.
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero.
    pub fn apply(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
