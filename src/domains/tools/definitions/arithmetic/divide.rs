//! Divide tool definition.
//!
//! A zero divisor is not an error: the tool succeeds with the text
//! "Cannot divide by zero". Too few numbers is an error.

use tracing::{info, instrument};

use crate::domains::calc::{self, Evaluation, PrecisionSetting, arithmetic};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{NumbersParams, ToolDefinition};

/// Divide tool - divides the first number by each following number.
pub struct DivideTool;

impl ToolDefinition for DivideTool {
    const NAME: &'static str = "divide";

    const DESCRIPTION: &'static str = "Divide the first number by each following number, rounding to the configured precision. Requires at least two numbers. Returns \"Cannot divide by zero\" if any divisor is zero.";

    type Params = NumbersParams;

    #[instrument(skip_all, fields(count = params.numbers.len()))]
    fn execute(params: &NumbersParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        let ctx = precision.context();
        info!("Divide tool called (precision {})", ctx.precision());

        let operands = calc::operands(&params.numbers)?;
        let result = arithmetic::quotient(&ctx, &operands)?;
        if let Evaluation::Undefined(reason) = &result {
            info!("Division undefined: {}", reason);
        }
        Ok(result.to_text())
    }
}
