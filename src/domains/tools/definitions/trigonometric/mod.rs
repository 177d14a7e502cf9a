//! Trigonometric tools.
//!
//! `sin`, `cos` and `tan` take angles plus an optional `mode`
//! ("radians" or "degrees"). `asin`, `acos` and `atan` take plain values and
//! return radians. Every result is rounded to 15 fractional digits.
//!
//! A single input returns a single string; several inputs return a JSON
//! array of strings.

pub mod acos;
pub mod asin;
pub mod atan;
pub mod cos;
pub mod sin;
pub mod tan;

pub use acos::AcosTool;
pub use asin::AsinTool;
pub use atan::AtanTool;
pub use cos::CosTool;
pub use sin::SinTool;
pub use tan::TanTool;
