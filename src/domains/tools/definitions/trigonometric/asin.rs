//! Arcsine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Arcsine tool. Every value must lie in [-1, 1].
pub struct AsinTool;

impl ToolDefinition for AsinTool {
    const NAME: &'static str = "asin";

    const DESCRIPTION: &'static str = "Calculate the arcsine (in radians) of one or more values between -1 and 1. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Arcsine tool called");
        evaluate_function(Function::Asin, &params.values, AngleMode::Radians, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_asin() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<AsinTool>(json!({ "values": [1] }), &precision);
        assert_eq!(text, "1.570796326794897");
    }

    #[test]
    fn test_asin_out_of_domain() {
        let precision = PrecisionSetting::default();
        let (text, is_error) = run_tool::<AsinTool>(json!({ "values": [2] }), &precision);
        assert!(is_error);
        assert_eq!(text, "Domain error: input value must be between -1 and 1");
    }

    #[test]
    fn test_asin_one_bad_value_fails_all() {
        let precision = PrecisionSetting::default();
        let (_, is_error) = run_tool::<AsinTool>(json!({ "values": [0, 0.5, -1.01] }), &precision);
        assert!(is_error);
    }
}
