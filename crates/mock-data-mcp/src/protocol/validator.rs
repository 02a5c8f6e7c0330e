//! JSON-RPC request validation.

use crate::types::{JsonRpcRequest, McpError, McpResult, JSONRPC_VERSION};

/// Reject requests that are not well-formed JSON-RPC 2.0.
pub fn validate_request(request: &JsonRpcRequest) -> McpResult<()> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(McpError::InvalidRequest(format!(
            "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{}\"",
            request.jsonrpc
        )));
    }

    if request.method.is_empty() {
        return Err(McpError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    // Reserved for JSON-RPC extensions.
    if request.method.starts_with("rpc.") {
        return Err(McpError::InvalidRequest(format!(
            "Method name \"{}\" is reserved",
            request.method
        )));
    }

    Ok(())
}
