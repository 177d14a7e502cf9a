//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::{debug, info};

use super::definitions::{DynamicResourceProvider, PrecisionResource, ServerInfoResource};
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ServerConfig;
use crate::domains::calc::PrecisionSetting;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// State that dynamic resources are computed from.
    context: ResourceContext,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,
}

/// State visible to dynamic resources.
#[derive(Debug, Clone)]
pub struct ResourceContext {
    /// Server identification.
    pub server: ServerConfig,

    /// Shared calculation precision.
    pub precision: PrecisionSetting,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed on every read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy)]
pub enum DynamicResourceType {
    /// Server name, version and tool list.
    ServerInfo,

    /// Current precision setting.
    Precision,
}

impl ResourceService {
    /// Create a new ResourceService reading from the given server state.
    pub fn new(server: ServerConfig, precision: PrecisionSetting) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            context: ResourceContext { server, precision },
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => match dynamic_type {
                DynamicResourceType::ServerInfo => ServerInfoResource::resolve(uri, &self.context)?,
                DynamicResourceType::Precision => PrecisionResource::resolve(uri, &self.context)?,
            },
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(ServerConfig::default(), PrecisionSetting::default())
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 3);
    }

    #[tokio::test]
    async fn test_read_static_resource() {
        let result = service().read_resource("calc://docs/readme").await.unwrap();
        assert!(text_of(&result).starts_with("# Decimal Calculator"));
    }

    #[tokio::test]
    async fn test_precision_resource_reflects_updates() {
        let precision = PrecisionSetting::default();
        let service = ResourceService::new(ServerConfig::default(), precision.clone());
        precision.set(42).unwrap();

        let result = service.read_resource("calc://precision").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(value["precision"], 42);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let err = service().read_resource("calc://nonexistent").await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }
}
