//! Arctangent tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Arctangent tool.
pub struct AtanTool;

impl ToolDefinition for AtanTool {
    const NAME: &'static str = "atan";

    const DESCRIPTION: &'static str = "Calculate the arctangent (in radians) of one or more values. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Arctangent tool called");
        evaluate_function(Function::Atan, &params.values, AngleMode::Radians, precision)
    }
}
