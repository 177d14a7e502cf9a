//! Hyperbolic cosine tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{AngleMode, Function, PrecisionSetting};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::evaluate_function;
use crate::domains::tools::definitions::{ToolDefinition, ValuesParams};

/// Hyperbolic cosine tool.
pub struct CoshTool;

impl ToolDefinition for CoshTool {
    const NAME: &'static str = "cosh";

    const DESCRIPTION: &'static str = "Calculate the hyperbolic cosine of one or more values. Results are rounded to 15 decimal places.";

    type Params = ValuesParams;

    #[instrument(skip_all, fields(count = params.values.len()))]
    fn execute(params: &ValuesParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Hyperbolic cosine tool called");
        evaluate_function(Function::Cosh, &params.values, AngleMode::Radians, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::run_tool;
    use serde_json::json;

    #[test]
    fn test_cosh_is_even() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<CoshTool>(json!({ "values": [-2, 2] }), &precision);
        let values: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(values[0], values[1]);
        assert_eq!(values[0], "3.762195691083631");
    }

    #[test]
    fn test_cosh_rounds_to_fifteen_places() {
        let precision = PrecisionSetting::default();
        let (text, _) = run_tool::<CoshTool>(json!({ "values": [5] }), &precision);
        assert_eq!(text, "74.209948524787844");
    }
}
