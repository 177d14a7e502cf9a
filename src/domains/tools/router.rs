//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Each tool
//! creates its own route from a clone of the shared precision setting.

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::calc::PrecisionSetting;

use super::definitions::{
    AcosTool, AcoshTool, AddTool, AsinTool, AsinhTool, AtanTool, AtanhTool, CosTool, CoshTool,
    DivideTool, GetPrecisionTool, MultiplyTool, SetPrecisionTool, SinTool, SinhTool,
    SubtractTool, TanTool, TanhTool, ToolDefinition,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(precision: PrecisionSetting) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route(precision.clone()))
        .with_route(SubtractTool::create_route(precision.clone()))
        .with_route(MultiplyTool::create_route(precision.clone()))
        .with_route(DivideTool::create_route(precision.clone()))
        .with_route(SinTool::create_route(precision.clone()))
        .with_route(CosTool::create_route(precision.clone()))
        .with_route(TanTool::create_route(precision.clone()))
        .with_route(AsinTool::create_route(precision.clone()))
        .with_route(AcosTool::create_route(precision.clone()))
        .with_route(AtanTool::create_route(precision.clone()))
        .with_route(SinhTool::create_route(precision.clone()))
        .with_route(CoshTool::create_route(precision.clone()))
        .with_route(TanhTool::create_route(precision.clone()))
        .with_route(AsinhTool::create_route(precision.clone()))
        .with_route(AcoshTool::create_route(precision.clone()))
        .with_route(AtanhTool::create_route(precision.clone()))
        .with_route(SetPrecisionTool::create_route(precision.clone()))
        .with_route(GetPrecisionTool::create_route(precision))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(PrecisionSetting::default());
        let tools = router.list_all();
        assert_eq!(tools.len(), 18);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        for expected in ["add", "subtract", "multiply", "divide", "tan", "atanh", "set_precision"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(PrecisionSetting::default());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
