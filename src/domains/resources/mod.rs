//! Resources domain module.
//!
//! Read-only views of the calculator server: its identity, the current
//! precision and the tool documentation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{
    DynamicResourceType, ResourceContent, ResourceContext, ResourceEntry, ResourceService,
};
