//! Inverse hyperbolic cosine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Inverse hyperbolic cosine tool. Every value must be at least 1.
pub struct AcoshTool;

impl ToolDefinition for AcoshTool {
    const NAME: &'static str = "acosh";

    const DESCRIPTION: &'static str = "Calculate the inverse hyperbolic cosine of one or more values greater than or equal to 1. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Inverse hyperbolic cosine tool called");
        evaluate_function(Function::Acosh, &params.values, AngleMode::Radians, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_acosh_one() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<AcoshTool>(json!({ "values": [1] }), &precision);
        assert_eq!(text, "0");
    }

    #[test]
    fn test_acosh_below_one_fails() {
        let precision = PrecisionSetting::default();
        let (text, is_error) = run_tool::<AcoshTool>(json!({ "values": [0.99] }), &precision);
        assert!(is_error);
        assert_eq!(
            text,
            "Domain error: input value must be greater than or equal to 1"
        );
    }
}
