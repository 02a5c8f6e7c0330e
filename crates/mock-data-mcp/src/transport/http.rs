//! HTTP transport: JSON-RPC over POST /mcp with optional bearer auth, plus /health.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::protocol::ProtocolHandler;
use crate::tools::ToolRegistry;
use crate::types::{mcp_error_codes, McpError, McpResult, RequestId};

use super::framing;

/// Shared server state passed to all handlers via axum State.
struct ServerState {
    token: Option<String>,
    handler: ProtocolHandler,
}

/// HTTP transport for web-based MCP clients.
pub struct HttpTransport {
    state: Arc<ServerState>,
}

impl HttpTransport {
    pub fn new(handler: ProtocolHandler, token: Option<String>) -> Self {
        Self {
            state: Arc::new(ServerState { token, handler }),
        }
    }

    /// Build the router. /health bypasses the auth layer.
    pub fn router(&self) -> Router {
        let state = self.state.clone();

        Router::new()
            .route("/mcp", post(handle_request))
            .layer(middleware::from_fn_with_state(state.clone(), auth_layer))
            .route("/health", get(handle_health))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
            .with_state(state)
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(McpError::Io)?;

        tracing::info!("Mock Data Generator MCP Server listening on http://{addr}");

        axum::serve(listener, app)
            .await
            .map_err(|e| McpError::Transport(e.to_string()))?;

        Ok(())
    }
}

fn rpc_error_body(code: i32, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": null,
        "error": { "code": code, "message": message }
    })
}

async fn auth_layer(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    request: axum::extract::Request,
    next: middleware::Next,
) -> Response {
    if let Some(expected) = &state.token {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|token| token == expected);

        if !authorized {
            tracing::warn!("Rejected unauthorized request");
            return (
                StatusCode::UNAUTHORIZED,
                AxumJson(rpc_error_body(
                    mcp_error_codes::UNAUTHORIZED,
                    &McpError::Unauthorized.to_string(),
                )),
            )
                .into_response();
        }
    }

    next.run(request).await
}

async fn handle_request(
    State(state): State<Arc<ServerState>>,
    AxumJson(body): AxumJson<Value>,
) -> Result<AxumJson<Value>, Response> {
    let msg = framing::parse_value(body).map_err(|e| {
        tracing::warn!("Rejected message: {e}");
        let body = serde_json::to_value(e.to_json_rpc_error(RequestId::Null)).unwrap_or_default();
        (StatusCode::BAD_REQUEST, AxumJson(body)).into_response()
    })?;

    match state.handler.handle_message(msg).await {
        Some(response) => Ok(AxumJson(response)),
        None => Ok(AxumJson(Value::Null)),
    }
}

async fn handle_health(State(state): State<Arc<ServerState>>) -> AxumJson<Value> {
    AxumJson(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": ToolRegistry::list_tools().len(),
        "uptime_secs": state.handler.context().uptime().as_secs(),
    }))
}
