//! Calculation error types.
//!
//! The display strings of these variants are returned verbatim to MCP
//! clients, so they must stay stable.

use thiserror::Error;

/// Errors raised while validating or evaluating a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Wrong arity or shape of the input.
    #[error("{0}")]
    InvalidArgument(String),

    /// Input outside the mathematical domain of the function.
    #[error("Domain error: {0}")]
    Domain(String),

    /// An input or intermediate value was an infinity or NaN.
    #[error("Result is not a finite number")]
    NonFinite,

    /// The high-precision evaluator failed internally.
    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    /// A value could not be represented as a decimal.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

impl CalcError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new "domain" error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Create a new "evaluation" error.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Create a new "invalid number" error.
    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }
}
