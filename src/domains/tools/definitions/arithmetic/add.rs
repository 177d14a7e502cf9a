//! Add tool definition.
//!
//! Sums an array of numbers at the configured precision.

use tracing::{info, instrument};

use crate::domains::calc::{self, PrecisionSetting, arithmetic, decimal};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{NumbersParams, ToolDefinition};

/// Add tool - sums numbers left to right.
pub struct AddTool;

impl ToolDefinition for AddTool {
    const NAME: &'static str = "add";

    const DESCRIPTION: &'static str = "Add an array of numbers using arbitrary-precision decimal arithmetic. An empty array sums to 0.";

    type Params = NumbersParams;

    #[instrument(skip_all, fields(count = params.numbers.len()))]
    fn execute(params: &NumbersParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        let ctx = precision.context();
        info!("Add tool called (precision {})", ctx.precision());

        let operands = calc::operands(&params.numbers)?;
        Ok(decimal::to_text(&arithmetic::sum(&ctx, &operands)))
    }
}
