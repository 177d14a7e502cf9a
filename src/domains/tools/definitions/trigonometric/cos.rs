//! Cosine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{AnglesParams, ToolDefinition};

/// Cosine tool.
pub struct CosTool;

impl ToolDefinition for CosTool {
    const NAME: &'static str = "cos";

    const DESCRIPTION: &'static str = "Calculate the cosine of one or more angles. Angles are in radians unless mode is \"degrees\". Results are rounded to 15 decimal places; several angles return a JSON array of strings.";

    type Params = AnglesParams;

    #[instrument(skip_all, fields(count = params.angles.len(), mode = ?params.mode))]
    fn execute(params: &AnglesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Cosine tool called");
        evaluate_function(Function::Cos, &params.angles, params.mode, precision)
    }
}
