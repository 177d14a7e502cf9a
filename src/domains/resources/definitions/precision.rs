//! Precision resource definition.
//!
//! Exposes the shared precision setting so clients can read it without
//! calling a tool.

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::calc::transcendental::DISPLAY_PLACES;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent, ResourceContext};
use rmcp::model::ResourceContents;

/// Current precision resource (dynamic).
pub struct PrecisionResource;

impl ResourceDefinition for PrecisionResource {
    const URI: &'static str = "calc://precision";
    const NAME: &'static str = "Calculation Precision";
    const DESCRIPTION: &'static str = "Current and maximum significant digits, and the fixed decimal places of trigonometric results";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Precision)
    }
}

impl DynamicResourceProvider for PrecisionResource {
    fn resolve(uri: &str, ctx: &ResourceContext) -> Result<ResourceContents, ResourceError> {
        json_contents(
            uri,
            &serde_json::json!({
                "precision": ctx.precision.get(),
                "max_precision": ctx.precision.max(),
                "transcendental_decimal_places": DISPLAY_PLACES,
            }),
        )
    }
}
