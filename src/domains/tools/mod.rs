//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool is a calculator operation backed by the `calc` domain.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool list, metadata and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` family
//! 2. Implement `ToolDefinition` (name, description, params, `execute()`)
//! 3. Export it in the family's `mod.rs` and `definitions/mod.rs`
//! 4. Add its route in `router.rs` and its entries in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
