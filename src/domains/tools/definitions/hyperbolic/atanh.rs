//! Inverse hyperbolic tangent tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Inverse hyperbolic tangent tool. Every value must satisfy |v| < 1.
pub struct AtanhTool;

impl ToolDefinition for AtanhTool {
    const NAME: &'static str = "atanh";

    const DESCRIPTION: &'static str = "Calculate the inverse hyperbolic tangent of one or more values strictly between -1 and 1. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Inverse hyperbolic tangent tool called");
        evaluate_function(Function::Atanh, &params.values, AngleMode::Radians, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_atanh() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<AtanhTool>(json!({ "values": [0.5] }), &precision);
        assert_eq!(text, "0.549306144334055");
    }

    #[test]
    fn test_atanh_boundary_fails() {
        let precision = PrecisionSetting::default();
        let (text, is_error) = run_tool::<AtanhTool>(json!({ "values": [1] }), &precision);
        assert!(is_error);
        assert_eq!(
            text,
            "Domain error: input value must be strictly between -1 and 1"
        );
    }
}
