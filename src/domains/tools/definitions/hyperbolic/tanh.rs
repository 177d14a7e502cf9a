//! Hyperbolic tangent tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Hyperbolic tangent tool.
pub struct TanhTool;

impl ToolDefinition for TanhTool {
    const NAME: &'static str = "tanh";

    const DESCRIPTION: &'static str = "Calculate the hyperbolic tangent of one or more values. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Hyperbolic tangent tool called");
        evaluate_function(Function::Tanh, &params.values, AngleMode::Radians, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_tanh() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<TanhTool>(json!({ "values": [1] }), &precision);
        assert_eq!(text, "0.761594155955765");
    }

    #[test]
    fn test_tanh_saturates() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<TanhTool>(json!({ "values": [50] }), &precision);
        assert_eq!(text, "1");
    }
}
