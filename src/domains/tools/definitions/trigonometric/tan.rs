//! Tangent tool definition.
//!
//! Angles whose cosine is within 1e-15 of zero report the text
//! "Undefined (angle is π/2 + nπ)" in place of a value. This is a
//! successful result, not an error.

use tracing::{info, instrument};

use crate::domains::calc::{Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{AnglesParams, ToolDefinition};

/// Tangent tool.
pub struct TanTool;

impl ToolDefinition for TanTool {
    const NAME: &'static str = "tan";

    const DESCRIPTION: &'static str = "Calculate the tangent of one or more angles. Angles are in radians unless mode is \"degrees\". Results are rounded to 15 decimal places. Angles at π/2 + nπ return \"Undefined (angle is π/2 + nπ)\".";

    type Params = AnglesParams;

    #[instrument(skip_all, fields(count = params.angles.len(), mode = ?params.mode))]
    fn execute(params: &AnglesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Tangent tool called");
        evaluate_function(Function::Tan, &params.angles, params.mode, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_tan_quarter_pi() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<TanTool>(json!({ "angles": [FRAC_PI_4] }), &precision);
        assert_eq!(text, "1");
    }

    #[test]
    fn test_tan_singularity() {
        let precision = PrecisionSetting::default();
        let (text, is_error) = run_tool::<TanTool>(json!({ "angles": [FRAC_PI_2] }), &precision);
        assert!(!is_error);
        assert_eq!(text, "Undefined (angle is π/2 + nπ)");
    }

    #[test]
    fn test_tan_mixed_array() {
        let precision = PrecisionSetting::default();
        let (text, is_error) = run_tool::<TanTool>(
            json!({ "angles": [45, 90], "mode": "degrees" }),
            &precision,
        );
        assert!(!is_error);
        let values: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(values, vec!["1", "Undefined (angle is π/2 + nπ)"]);
    }

    #[test]
    fn test_tan_high_precision_keeps_fifteen_places() {
        let precision = PrecisionSetting::default();
        precision.set(25).unwrap();
        let (text, is_error) = run_tool::<TanTool>(json!({ "angles": [1] }), &precision);
        assert!(!is_error);
        assert_eq!(text, "1.557407724654902");
        assert_eq!(text.split('.').nth(1).map(str::len), Some(15));
    }
}
