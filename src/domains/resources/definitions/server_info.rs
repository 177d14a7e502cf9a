//! Server info resource definition.

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::registry::resource_uris;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent, ResourceContext};
use crate::domains::tools::ToolRegistry;
use rmcp::model::ResourceContents;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "calc://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Name, version, current precision, tools and resources of this calculator server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, ctx: &ResourceContext) -> Result<ResourceContents, ResourceError> {
        let info = serde_json::json!({
            "server": ctx.server.name,
            "version": ctx.server.version,
            "precision": ctx.precision.get(),
            "tools": ToolRegistry::tool_names(),
            "resources": resource_uris(),
        });
        json_contents(uri, &info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServerConfig;
    use crate::domains::calc::PrecisionSetting;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "calc://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_resolve() {
        let ctx = ResourceContext {
            server: ServerConfig::default(),
            precision: PrecisionSetting::default(),
        };
        let result = ServerInfoResource::resolve(ServerInfoResource::URI, &ctx).unwrap();
        let ResourceContents::TextResourceContents { text, .. } = result else {
            panic!("Expected text contents");
        };
        let info: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(info["precision"], 20);
        assert_eq!(info["tools"].as_array().unwrap().len(), 18);
        assert_eq!(info["resources"][0], "calc://server/info");
        assert_eq!(info["resources"].as_array().unwrap().len(), 3);
    }
}
