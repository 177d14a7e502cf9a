//! Subtract tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{self, PrecisionSetting, arithmetic, decimal};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{NumbersParams, ToolDefinition};

/// Subtract tool - subtracts every following number from the first.
pub struct SubtractTool;

impl ToolDefinition for SubtractTool {
    const NAME: &'static str = "subtract";

    const DESCRIPTION: &'static str = "Subtract numbers left to right: the first number minus each following number. Requires at least two numbers; a single number is rejected rather than returned unchanged.";

    type Params = NumbersParams;

    #[instrument(skip_all, fields(count = params.numbers.len()))]
    fn execute(params: &NumbersParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Subtract tool called");
        let ctx = precision.context();
        let operands = calc::operands(&params.numbers)?;
        let result = arithmetic::difference(&ctx, &operands)?;
        Ok(decimal::to_text(&result))
    }
}
