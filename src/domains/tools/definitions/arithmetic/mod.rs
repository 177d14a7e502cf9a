//! Arithmetic tools.
//!
//! - `add`: running sum starting at zero
//! - `subtract`: first number minus every following number
//! - `multiply`: running product starting at one
//! - `divide`: first number divided by every following number
//!
//! Results keep the full configured precision and are never display-rounded.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

pub use add::AddTool;
pub use divide::DivideTool;
pub use multiply::MultiplyTool;
pub use subtract::SubtractTool;
