// src/api/tools.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::mcp::handler::handle_mcp_request;
use crate::mcp::protocol::{error_codes, Request, Response};
use crate::tools::{self, Tool, ToolError};
use crate::AppState;

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "name": "BaseQL MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "MCP server for Base SQL API context",
        "endpoints": {
            "GET /tools": "List available tools",
            "POST /call": "Call a tool",
            "POST /rpc": "JSON-RPC (MCP) over HTTP"
        }
    }))
}

pub async fn list_tools_handler() -> Json<Value> {
    Json(json!({ "tools": tools::CATALOG.clone() }))
}

#[derive(Deserialize)]
pub struct CallRequest {
    pub tool: Option<String>,
    #[serde(default)]
    pub params: Value,
}

/// Plain dispatch surface: `{tool, params}` in, tool payload out. Routes
/// through the same dispatch table as the MCP transport.
pub async fn call_tool_handler(
    State(state): State<AppState>,
    Json(body): Json<CallRequest>,
) -> impl IntoResponse {
    let tool_name = match body.tool.as_deref() {
        Some(name) => name,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing 'tool' parameter" })),
            )
        }
    };

    let tool = match Tool::from_name(tool_name) {
        Some(tool) => tool,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": ToolError::UnknownTool(tool_name.to_string()).to_string()
                })),
            )
        }
    };

    match tools::dispatch(tool, &body.params, &state).await {
        Ok(payload) => (StatusCode::OK, Json(payload)),
        Err(e @ ToolError::InvalidParams(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        ),
        Err(e @ ToolError::UnknownTool(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": e.to_string() })),
        ),
        Err(e @ ToolError::Execution(_)) => {
            error!("Tool execution failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

// Forward JSON-RPC requests over HTTP to the MCP handler
pub async fn rpc_handler(State(state): State<AppState>, Json(req): Json<Request>) -> Json<Response> {
    match handle_mcp_request(req, state).await {
        Some(resp) => Json(resp),
        None => Json(Response::error(
            Value::Null,
            error_codes::INVALID_REQUEST,
            "Notifications are not supported over HTTP".into(),
        )),
    }
}
