//! Inverse hyperbolic sine tool definition.
//!
//! Unlike the other transcendental tools, results are not rounded to 15
//! decimal places; only the configured precision applies.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Inverse hyperbolic sine tool.
pub struct AsinhTool;

impl ToolDefinition for AsinhTool {
    const NAME: &'static str = "asinh";

    const DESCRIPTION: &'static str = "Calculate the inverse hyperbolic sine of one or more values at the configured precision.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Inverse hyperbolic sine tool called");
        evaluate_function(Function::Asinh, &params.values, AngleMode::Radians, precision)
    }
}
