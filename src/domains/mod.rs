//! Domains module containing business logic organized by bounded contexts.
//!
//! - **calc**: decimal arithmetic and transcendental functions
//! - **tools**: MCP tools exposing the calculator
//! - **resources**: read-only server state

pub mod calc;
pub mod resources;
pub mod tools;
