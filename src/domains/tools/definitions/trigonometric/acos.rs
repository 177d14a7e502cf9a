//! Arccosine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Arccosine tool. Every value must lie in [-1, 1].
pub struct AcosTool;

impl ToolDefinition for AcosTool {
    const NAME: &'static str = "acos";

    const DESCRIPTION: &'static str = "Calculate the arccosine (in radians) of one or more values between -1 and 1. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Arccosine tool called");
        evaluate_function(Function::Acos, &params.values, AngleMode::Radians, precision)
    }
}
