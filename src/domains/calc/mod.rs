//! Calculation domain.
//!
//! Pure decimal computation behind the calculator tools. Nothing here knows
//! about MCP; tools convert their parameters, call into this module with a
//! [`MathContext`] snapshot and format the [`Evaluation`] they get back.
//!
//! - `context.rs` - shared precision setting and per-call snapshot
//! - `decimal.rs` - conversion, rounding and formatting
//! - `arithmetic.rs` - add, subtract, multiply, divide
//! - `transcendental.rs` - trigonometric and hyperbolic functions

pub mod arithmetic;
pub mod context;
pub mod decimal;
mod error;
pub mod transcendental;

use bigdecimal::BigDecimal;

pub use arithmetic::DIVISION_BY_ZERO;
pub use context::{MathContext, PrecisionSetting};
pub use error::CalcError;
pub use transcendental::{AngleMode, Function, TANGENT_UNDEFINED};

/// Outcome of a computation that may have no defined value.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// A finite decimal result.
    Value(BigDecimal),

    /// The input is well formed but the result is undefined. Reported to
    /// clients as successful text, never as an error.
    Undefined(&'static str),
}

impl Evaluation {
    /// Textual form returned to clients.
    pub fn to_text(&self) -> String {
        match self {
            Self::Value(value) => decimal::to_text(value),
            Self::Undefined(sentinel) => (*sentinel).to_string(),
        }
    }
}

/// Convert JSON operands into decimals.
pub fn operands(values: &[f64]) -> Result<Vec<BigDecimal>, CalcError> {
    values.iter().map(|&v| decimal::from_f64(v)).collect()
}
