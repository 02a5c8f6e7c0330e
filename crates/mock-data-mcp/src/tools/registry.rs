//! Tool registration and dispatch.

use serde_json::Value;

use crate::context::ServerContext;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::generate_mock_data;

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![generate_mock_data::definition()]
    }

    pub fn call(
        name: &str,
        arguments: Option<Value>,
        ctx: &ServerContext,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            generate_mock_data::TOOL_NAME => generate_mock_data::execute(args, ctx),
            _ => {
                tracing::warn!("Call to unknown tool: {name}");
                Err(McpError::UnknownTool(name.to_string()))
            }
        }
    }
}
