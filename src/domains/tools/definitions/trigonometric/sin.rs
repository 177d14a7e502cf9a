//! Sine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{AnglesParams, ToolDefinition};

/// Sine tool.
pub struct SinTool;

impl ToolDefinition for SinTool {
    const NAME: &'static str = "sin";

    const DESCRIPTION: &'static str = "Calculate the sine of one or more angles. Angles are in radians unless mode is \"degrees\". Results are rounded to 15 decimal places; several angles return a JSON array of strings.";

    type Params = AnglesParams;

    #[instrument(skip_all, fields(count = params.angles.len(), mode = ?params.mode))]
    fn execute(params: &AnglesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Sine tool called");
        evaluate_function(Function::Sin, &params.angles, params.mode, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_sin_degrees() {
        let precision = PrecisionSetting::default();
        let (text, is_error) =
            run_tool::<SinTool>(json!({ "angles": [90], "mode": "degrees" }), &precision);
        assert!(!is_error);
        assert_eq!(text, "1");
    }

    #[test]
    fn test_sin_array_output() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<SinTool>(
            json!({ "angles": [0, 30, 90], "mode": "degrees" }),
            &precision,
        );
        let values: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(values, vec!["0", "0.5", "1"]);
    }

    #[test]
    fn test_sin_radians_default() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<SinTool>(json!({ "angles": [1] }), &precision);
        assert_eq!(text, "0.841470984807897");
    }

    #[test]
    fn test_sin_high_precision_keeps_fifteen_places() {
        let precision = PrecisionSetting::default();
        precision.set(30).unwrap();
        let (text, _) = run_tool::<SinTool>(json!({ "angles": [1] }), &precision);
        assert_eq!(text, "0.841470984807897");
    }
}
