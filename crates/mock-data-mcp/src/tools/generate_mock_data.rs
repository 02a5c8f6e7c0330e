//! Tool: generate-mock-data. Synthesizes records for caller-chosen fields.

use serde_json::{json, Value};

use mock_data::{FieldKind, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};

use crate::context::ServerContext;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub const TOOL_NAME: &str = "generate-mock-data";

pub fn definition() -> ToolDefinition {
    let known: Vec<&str> = FieldKind::KNOWN.iter().map(FieldKind::as_str).collect();

    ToolDefinition {
        name: TOOL_NAME.to_string(),
        description: Some("Generate mock data for user-specified fields".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "count": {
                    "type": "integer",
                    "description": format!("Number of records to generate ({MIN_COUNT}-{MAX_COUNT})"),
                    "minimum": MIN_COUNT,
                    "maximum": MAX_COUNT,
                    "default": DEFAULT_COUNT
                },
                "fields": {
                    "type": "array",
                    "description": format!(
                        "Fields to generate ({}, ...). Unrecognized names get a random string.",
                        known.join(", ")
                    ),
                    "items": { "type": "string" },
                    "minItems": 1
                }
            },
            "required": ["fields"]
        }),
    }
}

pub fn execute(args: Value, ctx: &ServerContext) -> McpResult<ToolCallResult> {
    let results = ctx.generate(&args)?;
    let text = results.to_pretty_json()?;
    Ok(ToolCallResult::text(text))
}
