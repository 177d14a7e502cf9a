//! Hyperbolic tools.
//!
//! All take `values` and apply the function element-wise. Results are rounded
//! to 15 fractional digits except for `asinh`, which keeps the configured
//! precision.

pub mod acosh;
pub mod asinh;
pub mod atanh;
pub mod cosh;
pub mod sinh;
pub mod tanh;

pub use acosh::AcoshTool;
pub use asinh::AsinhTool;
pub use atanh::AtanhTool;
pub use cosh::CoshTool;
pub use sinh::SinhTool;
pub use tanh::TanhTool;
