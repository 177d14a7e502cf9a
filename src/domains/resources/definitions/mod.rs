//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod docs_readme;
pub mod precision;
pub mod server_info;

use rmcp::model::ResourceContents;

use super::error::ResourceError;
use super::service::{ResourceContent, ResourceContext};

pub use docs_readme::DocsReadmeResource;
pub use precision::PrecisionResource;
pub use server_info::ServerInfoResource;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed on every read.
pub trait DynamicResourceProvider {
    /// Resolve the dynamic content.
    fn resolve(uri: &str, ctx: &ResourceContext) -> Result<ResourceContents, ResourceError>;
}

/// Render a JSON value as pretty-printed text contents.
pub(crate) fn json_contents(
    uri: &str,
    value: &serde_json::Value,
) -> Result<ResourceContents, ResourceError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| ResourceError::internal(e.to_string()))?;
    Ok(ResourceContents::text(text, uri))
}
