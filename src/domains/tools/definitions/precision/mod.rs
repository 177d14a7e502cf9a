//! Precision control tools.
//!
//! The precision is shared by every tool for the lifetime of the process:
//! a `set_precision` call affects all later calls, on every connection.

pub mod get;
pub mod set;

pub use get::GetPrecisionTool;
pub use set::{SetPrecisionParams, SetPrecisionTool};
