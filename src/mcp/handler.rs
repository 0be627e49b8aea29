//! # MCP Handler Module
//!
//! Dispatches incoming MCP requests (`initialize`, `tools/list`,
//! `tools/call`) to the shared tool dispatch table. Tool results are
//! wrapped in a single text content block holding the serialized JSON
//! payload, which is what MCP clients expect.

use serde_json::{json, Value};
use tracing::info;

use crate::mcp::protocol::{error_codes, Request, Response};
use crate::tools::{self, Tool, ToolError};
use crate::AppState;

/// Main entry point for MCP requests from either the stdio loop or the
/// HTTP `/rpc` forwarder. Notifications get no response.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tool_call(req, state).await,
        // Convenience aliases: calling a tool name directly as the JSON-RPC
        // method is rewritten into tools/call so both paths share one code
        // path.
        method if Tool::from_name(method).is_some() => {
            let wrapped = Request {
                jsonrpc: req.jsonrpc.clone(),
                id: req.id.clone(),
                method: "tools/call".to_string(),
                params: Some(json!({
                    "name": req.method.clone(),
                    "arguments": req.params.clone().unwrap_or_else(|| json!({}))
                })),
            };
            handle_tool_call(wrapped, state).await
        }
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let tool = match Tool::from_name(tool_name) {
        Some(tool) => tool,
        None => {
            return Response::error(
                req.id,
                error_codes::METHOD_NOT_FOUND,
                ToolError::UnknownTool(tool_name.to_string()).to_string(),
            )
        }
    };

    let empty_args = json!({});
    let args = params.get("arguments").unwrap_or(&empty_args);

    match tools::dispatch(tool, args, &state).await {
        Ok(payload) => match wrap_content(&payload) {
            Ok(result) => Response::success(req.id, result),
            Err(e) => Response::error(req.id, error_codes::INTERNAL_ERROR, e.to_string()),
        },
        Err(e @ ToolError::InvalidParams(_)) => {
            Response::error(req.id, error_codes::INVALID_PARAMS, e.to_string())
        }
        Err(e @ ToolError::UnknownTool(_)) => {
            Response::error(req.id, error_codes::METHOD_NOT_FOUND, e.to_string())
        }
        Err(e @ ToolError::Execution(_)) => {
            Response::error(req.id, error_codes::INTERNAL_ERROR, e.to_string())
        }
    }
}

// One text content block carrying the serialized payload.
fn wrap_content(payload: &Value) -> Result<Value, serde_json::Error> {
    let text = serde_json::to_string_pretty(payload)?;
    Ok(json!({
        "content": [{ "type": "text", "text": text }]
    }))
}

fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": "baseql_mcp",
        "version": env!("CARGO_PKG_VERSION")
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions = "BaseQL MCP server: contract registry, SQL templates, ENS resolution, \
        token prices, and direct SQL execution against Base blockchain data.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": "2025-06-18",
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

fn handle_tools_list(req: &Request) -> Response {
    Response::success(req.id.clone(), json!({ "tools": tools::CATALOG.clone() }))
}
