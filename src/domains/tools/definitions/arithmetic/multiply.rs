//! Multiply tool definition.

use tracing::{info, instrument};

use crate::domains::calc::{self, PrecisionSetting, arithmetic, decimal};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{NumbersParams, ToolDefinition};

/// Multiply tool - running product of all numbers.
pub struct MultiplyTool;

impl ToolDefinition for MultiplyTool {
    const NAME: &'static str = "multiply";

    const DESCRIPTION: &'static str = "Multiply an array of numbers using arbitrary-precision decimal arithmetic. An empty array multiplies to 1.";

    type Params = NumbersParams;

    #[instrument(skip_all, fields(count = params.numbers.len()))]
    fn execute(params: &NumbersParams, precision: &PrecisionSetting) -> Result<String, ToolError> {
        info!("Multiply tool called");
        let ctx = precision.context();
        let operands = calc::operands(&params.numbers)?;
        Ok(decimal::to_text(&arithmetic::product(&ctx, &operands)))
    }
}
