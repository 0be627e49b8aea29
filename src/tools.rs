//! # Tool Dispatcher
//!
//! One typed operation set, one descriptor catalog, one dispatch function.
//! Both transports (the JSON-RPC MCP surface and the plain HTTP `/call`
//! surface) resolve names through `Tool::from_name` and route through
//! `dispatch`, so there is no divergent per-transport logic.

use lazy_static::lazy_static;
use serde_json::{json, Value};
use thiserror::Error;

use crate::registry::{self, docs};
use crate::utils::get_required_arg;
use crate::{advisor, AppState};

/// Every operation this server exposes. Adding a variant forces the match
/// in `dispatch` (and the catalog) to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GetSchema,
    GetCapabilities,
    GetSqlBestPractices,
    GetContract,
    GetContractByAddress,
    GetQueryTemplate,
    GetTokenAge,
    RunSqlQuery,
    ResolveName,
    GetNameForAddress,
    GetNamesForAddresses,
    GetTokenPrice,
    GetMultipleTokenPrices,
}

impl Tool {
    pub const ALL: &'static [Tool] = &[
        Tool::GetSchema,
        Tool::GetCapabilities,
        Tool::GetSqlBestPractices,
        Tool::GetContract,
        Tool::GetContractByAddress,
        Tool::GetQueryTemplate,
        Tool::GetTokenAge,
        Tool::RunSqlQuery,
        Tool::ResolveName,
        Tool::GetNameForAddress,
        Tool::GetNamesForAddresses,
        Tool::GetTokenPrice,
        Tool::GetMultipleTokenPrices,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::GetSchema => "get_schema",
            Tool::GetCapabilities => "get_capabilities",
            Tool::GetSqlBestPractices => "get_sql_best_practices",
            Tool::GetContract => "get_contract",
            Tool::GetContractByAddress => "get_contract_by_address",
            Tool::GetQueryTemplate => "get_query_template",
            Tool::GetTokenAge => "get_token_age",
            Tool::RunSqlQuery => "run_sql_query",
            Tool::ResolveName => "resolve_name",
            Tool::GetNameForAddress => "get_name_for_address",
            Tool::GetNamesForAddresses => "get_names_for_addresses",
            Tool::GetTokenPrice => "get_token_price",
            Tool::GetMultipleTokenPrices => "get_multiple_token_prices",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::GetSchema => "Get Base SQL tables, columns, and best practices",
            Tool::GetCapabilities => {
                "Understand what BaseQL is good at and what it kind of sucks at"
            }
            Tool::GetSqlBestPractices => "Get important SQL rules",
            Tool::GetContract => "Get Base mainnet contract by symbol",
            Tool::GetContractByAddress => "Reverse contract lookup",
            Tool::GetQueryTemplate => "Get SQL query template",
            Tool::GetTokenAge => {
                "REQUIRED for holder queries! Returns the safe time window for a token"
            }
            Tool::RunSqlQuery => "Execute SQL against Base (SELECT only, ClickHouse dialect)",
            Tool::ResolveName => "Resolve ENS/Basename to wallet address",
            Tool::GetNameForAddress => {
                "Resolve wallet address to any associated ENS/Basename (reverse lookup)"
            }
            Tool::GetNamesForAddresses => "Batch reverse ENS lookup",
            Tool::GetTokenPrice => "Get token price from Coinbase Exchange",
            Tool::GetMultipleTokenPrices => "Get prices for multiple tokens at once",
        }
    }

    /// JSON-schema shape of the tool's arguments.
    fn input_schema(self) -> Value {
        let empty = json!({ "type": "object", "properties": {}, "additionalProperties": false });
        match self {
            Tool::GetSchema | Tool::GetCapabilities | Tool::GetSqlBestPractices => empty,
            Tool::GetContract | Tool::GetTokenPrice => json!({
                "type": "object",
                "properties": {
                    "symbol": {"type": "string", "description": "Contract symbol (USDC, WETH, etc.)"}
                },
                "required": ["symbol"],
                "additionalProperties": false
            }),
            Tool::GetContractByAddress | Tool::GetNameForAddress => json!({
                "type": "object",
                "properties": {
                    "address": {"type": "string", "description": "Ethereum address (0x...)"}
                },
                "required": ["address"],
                "additionalProperties": false
            }),
            Tool::GetQueryTemplate => json!({
                "type": "object",
                "properties": {
                    "templateKey": {"type": "string", "description": "Template key (e.g. token_holders)"}
                },
                "required": ["templateKey"],
                "additionalProperties": false
            }),
            Tool::GetTokenAge => json!({
                "type": "object",
                "properties": {
                    "token_address": {"type": "string", "description": "Token contract address (0x...)"}
                },
                "required": ["token_address"],
                "additionalProperties": false
            }),
            Tool::RunSqlQuery => json!({
                "type": "object",
                "properties": {
                    "sql": {"type": "string", "description": "SQL query to execute (SELECT only, ClickHouse dialect)"}
                },
                "required": ["sql"],
                "additionalProperties": false
            }),
            Tool::ResolveName => json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "ENS name (vitalik.eth) or Basename (jnix.base.eth)"}
                },
                "required": ["name"],
                "additionalProperties": false
            }),
            Tool::GetNamesForAddresses => json!({
                "type": "object",
                "properties": {
                    "addresses": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Array of Ethereum addresses"
                    }
                },
                "required": ["addresses"],
                "additionalProperties": false
            }),
            Tool::GetMultipleTokenPrices => json!({
                "type": "object",
                "properties": {
                    "symbols": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Array of token symbols"
                    }
                },
                "required": ["symbols"],
                "additionalProperties": false
            }),
        }
    }
}

lazy_static! {
    /// Static tool catalog served by `tools/list` and `GET /tools`.
    pub static ref CATALOG: Value = Value::Array(
        Tool::ALL
            .iter()
            .map(|tool| json!({
                "name": tool.name(),
                "description": tool.description(),
                "inputSchema": tool.input_schema(),
            }))
            .collect()
    );
}

/// Dispatch-level failures. Domain-level misses (unknown symbol, template,
/// token with no transfers) are structured success payloads, not errors.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Missing or invalid required argument: '{0}'")]
    InvalidParams(String),
    #[error("Tool execution failed: {0}")]
    Execution(String),
}

/// Route one operation to its handler. Shared verbatim by both transports.
pub async fn dispatch(tool: Tool, args: &Value, state: &AppState) -> Result<Value, ToolError> {
    match tool {
        Tool::GetSchema => Ok(docs::schema()),
        Tool::GetCapabilities => Ok(docs::capabilities()),
        Tool::GetSqlBestPractices => Ok(docs::best_practices()),
        Tool::GetContract => {
            let symbol: String = get_required_arg(args, "symbol")?;
            Ok(registry::contract_payload(&symbol))
        }
        Tool::GetContractByAddress => {
            let address: String = get_required_arg(args, "address")?;
            Ok(registry::contract_by_address_payload(&address))
        }
        Tool::GetQueryTemplate => {
            let key: String = get_required_arg(args, "templateKey")?;
            Ok(registry::template_payload(&key))
        }
        Tool::GetTokenAge => {
            let token_address: String = get_required_arg(args, "token_address")?;
            Ok(advisor::token_age(&state.sql, &token_address).await)
        }
        Tool::RunSqlQuery => {
            let sql: String = get_required_arg(args, "sql")?;
            Ok(state.sql.run(&sql).await)
        }
        Tool::ResolveName => {
            let name: String = get_required_arg(args, "name")?;
            Ok(state.ens.resolve_name(&name).await)
        }
        Tool::GetNameForAddress => {
            let address: String = get_required_arg(args, "address")?;
            Ok(state.ens.name_for_address(&address).await)
        }
        Tool::GetNamesForAddresses => {
            let addresses: Vec<String> = get_required_arg(args, "addresses")?;
            Ok(state.ens.names_for_addresses(&addresses).await)
        }
        Tool::GetTokenPrice => {
            let symbol: String = get_required_arg(args, "symbol")?;
            Ok(state.price.get_price(&symbol).await)
        }
        Tool::GetMultipleTokenPrices => {
            let symbols: Vec<String> = get_required_arg(args, "symbols")?;
            Ok(state.price.get_prices(&symbols).await)
        }
    }
}
