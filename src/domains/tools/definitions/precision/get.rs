//! Get precision tool definition.

use tracing::info;

use crate::domains::calc::PrecisionSetting;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{NoParams, ToolDefinition};

/// Get precision tool - reports the current significant digits.
pub struct GetPrecisionTool;

impl ToolDefinition for GetPrecisionTool {
    const NAME: &'static str = "get_precision";

    const DESCRIPTION: &'static str = "Get the number of significant digits currently used by calculations.";

    type Params = NoParams;

    fn execute(_params: &NoParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Get precision tool called");
        Ok(format!(
            "Current precision: {} significant digits",
            precision.get()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_get_precision_reflects_setting() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<GetPrecisionTool>(json!({}), &precision);
        assert_eq!(text, "Current precision: 20 significant digits");

        precision.set(42).unwrap();
        let (text, _) = run_tool::<GetPrecisionTool>(json!({}), &precision);
        assert_eq!(text, "Current precision: 42 significant digits");
    }
}
