//! Message framing for newline-delimited JSON.

use serde_json::Value;

use crate::types::{JsonRpcMessage, McpError, McpResult};

/// Parse a single line of text as a JSON-RPC message.
pub fn parse_message(line: &str) -> McpResult<JsonRpcMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(McpError::ParseError("Empty message".to_string()));
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| McpError::ParseError(e.to_string()))?;
    parse_value(value)
}

/// Interpret already-decoded JSON as a JSON-RPC message.
///
/// An object carrying `id` must come out as a request or response; one that
/// only matches the notification shape would otherwise go unanswered.
pub fn parse_value(value: Value) -> McpResult<JsonRpcMessage> {
    let has_id = value.get("id").is_some();
    let msg: JsonRpcMessage =
        serde_json::from_value(value).map_err(|e| McpError::InvalidRequest(e.to_string()))?;

    if has_id && matches!(msg, JsonRpcMessage::Notification(_)) {
        return Err(McpError::InvalidRequest(
            "id must be a string, number or null".to_string(),
        ));
    }

    Ok(msg)
}

/// Serialize a value to a JSON line (with trailing newline).
pub fn frame_message(value: &serde_json::Value) -> McpResult<String> {
    let mut json = serde_json::to_string(value).map_err(McpError::Json)?;
    json.push('\n');
    Ok(json)
}
