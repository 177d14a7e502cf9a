//! Set precision tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::calc::PrecisionSetting;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the set precision tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetPrecisionParams {
    /// Number of significant digits for subsequent calculations.
    pub precision: u32,
}

/// Set precision tool - changes the significant digits used by arithmetic.
pub struct SetPrecisionTool;

impl ToolDefinition for SetPrecisionTool {
    const NAME: &'static str = "set_precision";

    const DESCRIPTION: &'static str = "Set the number of significant digits used by all subsequent calculations (default 20).";

    type Params = SetPrecisionParams;

    #[instrument(skip_all, fields(precision = params.precision))]
    fn execute(
        params: &SetPrecisionParams,
        precision: &PrecisionSetting,
    ) -> Result<String, ToolError> {
        info!("Set precision tool called");
        precision.set(params.precision)?;
        Ok(format!(
            "Precision set to {} significant digits",
            params.precision
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::{DivideTool, run_tool};
    use serde_json::json;

    #[test]
    fn test_set_precision() {
        let precision = PrecisionSetting::default();
        let (text, is_error) =
            run_tool::<SetPrecisionTool>(json!({ "precision": 5 }), &precision);
        assert!(!is_error);
        assert_eq!(text, "Precision set to 5 significant digits");
        assert_eq!(precision.get(), 5);
    }

    #[test]
    fn test_set_precision_affects_later_calls() {
        let precision = PrecisionSetting::default();
        run_tool::<SetPrecisionTool>(json!({ "precision": 5 }), &precision);
        let (text, _) = run_tool::<DivideTool>(json!({ "numbers": [1, 3] }), &precision);
        assert_eq!(text, "0.33333");
    }

    #[test]
    fn test_set_precision_zero_fails() {
        let precision = PrecisionSetting::default();
        let (text, is_error) =
            run_tool::<SetPrecisionTool>(json!({ "precision": 0 }), &precision);
        assert!(is_error);
        assert_eq!(text, "Precision must be between 1 and 10000");
        assert_eq!(precision.get(), 20);
    }

    #[test]
    fn test_set_precision_rejects_negative() {
        let serde_json::Value::Object(args) = json!({ "precision": -3 }) else {
            unreachable!()
        };
        assert!(SetPrecisionTool::parse(args).is_err());
    }
}
