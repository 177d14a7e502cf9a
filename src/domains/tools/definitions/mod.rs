//! Tool definitions module.
//!
//! Each tool is defined in its own file and implements [`ToolDefinition`].
//! The trait supplies the rmcp metadata, the STDIO/TCP route and the HTTP
//! handler, so a tool file only declares its name, description, parameter
//! type and `execute()`.

pub mod arithmetic;
pub mod common;
pub mod hyperbolic;
pub mod precision;
pub mod trigonometric;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::ToolError;
use crate::domains::calc::PrecisionSetting;

pub use arithmetic::{AddTool, DivideTool, MultiplyTool, SubtractTool};
pub use common::{AnglesParams, NoParams, NumbersParams, ValuesParams};
pub use hyperbolic::{AcoshTool, AsinhTool, AtanhTool, CoshTool, SinhTool, TanhTool};
pub use precision::{GetPrecisionTool, SetPrecisionParams, SetPrecisionTool};
pub use trigonometric::{AcosTool, AsinTool, AtanTool, CosTool, SinTool, TanTool};

/// Trait for calculator tool definitions.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Deserialized tool arguments; also the source of the input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool and produce its text result.
    ///
    /// Sentinel outcomes such as division by zero are `Ok`.
    fn execute(params: &Self::Params, precision: &PrecisionSetting) -> Result<String, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Deserialize raw call arguments.
    fn parse(arguments: JsonObject) -> Result<Self::Params, ToolError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Execute and wrap the outcome as an MCP tool result.
    fn call(params: &Self::Params, precision: &PrecisionSetting) -> CallToolResult {
        match Self::execute(params, precision) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("{} failed: {}", Self::NAME, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>(precision: PrecisionSetting) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let precision = precision.clone();
            async move {
                let params =
                    Self::parse(args).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::call(&params, &precision))
            }
            .boxed()
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    fn http_handler(
        arguments: serde_json::Value,
        precision: &PrecisionSetting,
    ) -> Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => return Err(format!("Arguments must be an object, got {}", other)),
        };
        let params = Self::parse(arguments).map_err(|e| e.to_string())?;
        let result = Self::call(&params, precision);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

/// Run a tool end to end from JSON arguments, returning its text and error flag.
#[cfg(test)]
pub(crate) fn run_tool<T: ToolDefinition>(
    arguments: serde_json::Value,
    precision: &PrecisionSetting,
) -> (String, bool) {
    let arguments = match arguments {
        serde_json::Value::Object(map) => map,
        _ => panic!("Expected object arguments"),
    };
    let params = T::parse(arguments).expect("arguments should deserialize");
    let result = T::call(&params, precision);
    let text = match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    };
    (text, result.is_error.unwrap_or(false))
}
