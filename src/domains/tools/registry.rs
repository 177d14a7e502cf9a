//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools and their metadata
//! - HTTP dispatch for tool calls (when http feature is enabled)

use rmcp::model::Tool;
#[cfg(feature = "http")]
use tracing::warn;

use crate::domains::calc::PrecisionSetting;

use super::definitions::{
    AcosTool, AcoshTool, AddTool, AsinTool, AsinhTool, AtanTool, AtanhTool, CosTool, CoshTool,
    DivideTool, GetPrecisionTool, MultiplyTool, SetPrecisionTool, SinTool, SinhTool,
    SubtractTool, TanTool, TanhTool, ToolDefinition,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    precision: PrecisionSetting,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the server's precision setting.
    pub fn new(precision: PrecisionSetting) -> Self {
        Self { precision }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            AddTool::NAME,
            SubtractTool::NAME,
            MultiplyTool::NAME,
            DivideTool::NAME,
            SinTool::NAME,
            CosTool::NAME,
            TanTool::NAME,
            AsinTool::NAME,
            AcosTool::NAME,
            AtanTool::NAME,
            SinhTool::NAME,
            CoshTool::NAME,
            TanhTool::NAME,
            AsinhTool::NAME,
            AcoshTool::NAME,
            AtanhTool::NAME,
            SetPrecisionTool::NAME,
            GetPrecisionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddTool::to_tool(),
            SubtractTool::to_tool(),
            MultiplyTool::to_tool(),
            DivideTool::to_tool(),
            SinTool::to_tool(),
            CosTool::to_tool(),
            TanTool::to_tool(),
            AsinTool::to_tool(),
            AcosTool::to_tool(),
            AtanTool::to_tool(),
            SinhTool::to_tool(),
            CoshTool::to_tool(),
            TanhTool::to_tool(),
            AsinhTool::to_tool(),
            AcoshTool::to_tool(),
            AtanhTool::to_tool(),
            SetPrecisionTool::to_tool(),
            GetPrecisionTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let precision = &self.precision;
        match name {
            AddTool::NAME => AddTool::http_handler(arguments, precision),
            SubtractTool::NAME => SubtractTool::http_handler(arguments, precision),
            MultiplyTool::NAME => MultiplyTool::http_handler(arguments, precision),
            DivideTool::NAME => DivideTool::http_handler(arguments, precision),
            SinTool::NAME => SinTool::http_handler(arguments, precision),
            CosTool::NAME => CosTool::http_handler(arguments, precision),
            TanTool::NAME => TanTool::http_handler(arguments, precision),
            AsinTool::NAME => AsinTool::http_handler(arguments, precision),
            AcosTool::NAME => AcosTool::http_handler(arguments, precision),
            AtanTool::NAME => AtanTool::http_handler(arguments, precision),
            SinhTool::NAME => SinhTool::http_handler(arguments, precision),
            CoshTool::NAME => CoshTool::http_handler(arguments, precision),
            TanhTool::NAME => TanhTool::http_handler(arguments, precision),
            AsinhTool::NAME => AsinhTool::http_handler(arguments, precision),
            AcoshTool::NAME => AcoshTool::http_handler(arguments, precision),
            AtanhTool::NAME => AtanhTool::http_handler(arguments, precision),
            SetPrecisionTool::NAME => SetPrecisionTool::http_handler(arguments, precision),
            GetPrecisionTool::NAME => GetPrecisionTool::http_handler(arguments, precision),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 18);
        for name in [
            "add", "subtract", "multiply", "divide", "sin", "cos", "tan", "asin", "acos", "atan",
            "sinh", "cosh", "tanh", "asinh", "acosh", "atanh", "set_precision", "get_precision",
        ] {
            assert!(names.contains(&name), "missing {}", name);
        }
    }

    #[test]
    fn test_metadata_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names = ToolRegistry::tool_names();
        assert_eq!(tools.len(), names.len());
        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name, name);
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_divide() {
        let registry = ToolRegistry::new(PrecisionSetting::default());
        let result = registry
            .call_tool("divide", serde_json::json!({ "numbers": [1, 0] }))
            .unwrap();
        assert_eq!(result["content"][0]["text"], "Cannot divide by zero");
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_shares_precision() {
        let precision = PrecisionSetting::default();
        let registry = ToolRegistry::new(precision.clone());
        registry
            .call_tool("set_precision", serde_json::json!({ "precision": 5 }))
            .unwrap();
        assert_eq!(precision.get(), 5);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(PrecisionSetting::default());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert_eq!(result.unwrap_err(), "Tool not found: unknown");
    }
}
