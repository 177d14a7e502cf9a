//! Parameter types and helpers shared across calculator tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::calc::transcendental::evaluate_all;
use crate::domains::calc::{AngleMode, Evaluation, Function, PrecisionSetting};
use crate::domains::tools::ToolError;

/// Parameters for the arithmetic tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NumbersParams {
    /// Operands, applied left to right.
    pub numbers: Vec<f64>,
}

/// Parameters for `sin`, `cos` and `tan`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnglesParams {
    /// Angles to evaluate.
    pub angles: Vec<f64>,

    /// Unit of the angles: "radians" (default) or "degrees".
    #[serde(default)]
    pub mode: AngleMode,
}

/// Parameters for inverse trigonometric and hyperbolic tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValuesParams {
    /// Values to evaluate.
    pub values: Vec<f64>,
}

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Format per-element results.
///
/// One element yields its text directly; any other count yields a JSON
/// array of strings.
pub fn render(results: &[Evaluation]) -> Result<String, ToolError> {
    if let [single] = results {
        return Ok(single.to_text());
    }
    let texts: Vec<String> = results.iter().map(Evaluation::to_text).collect();
    serde_json::to_string(&texts)
        .map_err(|e| ToolError::internal(format!("Failed to encode results: {}", e)))
}

/// Evaluate a transcendental function over `values` at the current precision.
pub fn evaluate_function(
    function: Function,
    values: &[f64],
    mode: AngleMode,
    precision: &PrecisionSetting,
) -> Result<String, ToolError> {
    let ctx = precision.context();
    let results = evaluate_all(&ctx, function, values, mode)?;
    render(&results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::calc::{DIVISION_BY_ZERO, decimal::from_f64};

    #[test]
    fn test_render_single_is_scalar() {
        let results = vec![Evaluation::Value(from_f64(0.5).unwrap())];
        assert_eq!(render(&results).unwrap(), "0.5");
    }

    #[test]
    fn test_render_many_is_json_array() {
        let results = vec![
            Evaluation::Value(from_f64(1.0).unwrap()),
            Evaluation::Undefined(DIVISION_BY_ZERO),
        ];
        assert_eq!(
            render(&results).unwrap(),
            r#"["1","Cannot divide by zero"]"#
        );
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_angles_mode_defaults_to_radians() {
        let params: AnglesParams = serde_json::from_value(serde_json::json!({
            "angles": [1.0]
        }))
        .unwrap();
        assert_eq!(params.mode, AngleMode::Radians);
    }

    #[test]
    fn test_angles_mode_is_validated() {
        let result: Result<AnglesParams, _> = serde_json::from_value(serde_json::json!({
            "angles": [1.0],
            "mode": "turns"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        let params: Result<NoParams, _> = serde_json::from_value(serde_json::json!({}));
        assert!(params.is_ok());
    }
}
