//! Hyperbolic sine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Hyperbolic sine tool.
pub struct SinhTool;

impl ToolDefinition for SinhTool {
    const NAME: &'static str = "sinh";

    const DESCRIPTION: &'static str = "Calculate the hyperbolic sine of one or more values. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Hyperbolic sine tool called");
        evaluate_function(Function::Sinh, &params.values, AngleMode::Radians, precision)
    }
}
