//! Decimal Calculator MCP Server
//!
//! An MCP server exposing arbitrary-precision decimal arithmetic,
//! trigonometric and hyperbolic functions as tools. A single precision
//! setting, adjustable through the `set_precision` tool, governs every
//! calculation.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **calc**: decimal computation, independent of MCP
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: read-only server state
//!
//! # Example
//!
//! ```rust,no_run
//! use decimal_calculator_mcp::{core::Config, core::McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
