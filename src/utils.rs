//! Utility functions for the BaseQL MCP server

use serde::de::DeserializeOwned;
use serde_json::{from_value, Value};

use crate::tools::ToolError;

/// Extract a required argument from a tool-call argument object, failing
/// with a validation error before any handler work happens.
pub fn get_required_arg<T: DeserializeOwned>(args: &Value, key: &str) -> Result<T, ToolError> {
    from_value(args.get(key).cloned().unwrap_or(Value::Null))
        .map_err(|_| ToolError::InvalidParams(key.to_string()))
}
