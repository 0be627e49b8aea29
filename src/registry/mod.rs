//! # Registry Module
//!
//! Static, load-once reference data for the BaseQL server: the Base mainnet
//! contract table, the canned SQL query templates, and the schema/capability
//! documentation objects. Nothing here mutates after startup.

pub mod contracts;
pub mod docs;
pub mod templates;

use serde::Serialize;
use serde_json::{json, Value};

/// A known Base mainnet contract. Tokens carry `symbol` and `decimals`;
/// NFT collections and infrastructure contracts carry `kind`/`category`
/// or a free-form description instead.
#[derive(Debug, Clone, Serialize)]
pub struct ContractEntry {
    #[serde(skip)]
    pub key: &'static str,
    pub address: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
}

/// A pre-built SQL query template. The `{placeholder}` markers in `sql` are
/// substituted by the caller; no escaping is performed here.
#[derive(Debug, Clone, Serialize)]
pub struct QueryTemplate {
    #[serde(skip)]
    pub key: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
    pub sql: &'static str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub usage_notes: &'static [&'static str],
}

/// Case-insensitive symbol lookup against the contract table.
pub fn lookup_by_symbol(symbol: &str) -> Option<&'static ContractEntry> {
    contracts::BASE_CONTRACTS
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(symbol))
}

/// Reverse lookup by contract address. The table stores addresses lowercase,
/// so lowercasing the input is the whole normalization; the table is small
/// enough that a linear scan is fine.
pub fn lookup_by_address(address: &str) -> Option<&'static ContractEntry> {
    let lower = address.to_lowercase();
    contracts::BASE_CONTRACTS
        .iter()
        .find(|c| c.address == lower)
}

pub fn get_template(key: &str) -> Option<&'static QueryTemplate> {
    templates::QUERY_TEMPLATES.iter().find(|t| t.key == key)
}

/// Registry keys in insertion order, for "not found, available:" messages.
pub fn list_symbols() -> Vec<&'static str> {
    contracts::BASE_CONTRACTS.iter().map(|c| c.key).collect()
}

pub fn list_template_keys() -> Vec<&'static str> {
    templates::QUERY_TEMPLATES.iter().map(|t| t.key).collect()
}

/// Payload for `get_contract`: the entry itself, or a miss message listing
/// every registered symbol.
pub fn contract_payload(symbol: &str) -> Value {
    match lookup_by_symbol(symbol) {
        Some(entry) => json!(entry),
        None => json!({
            "error": format!("not found - available: {}", list_symbols().join(", "))
        }),
    }
}

/// Payload for `get_contract_by_address`: a flattened hit with `found: true`,
/// or a `found: false` marker for addresses outside the registry.
pub fn contract_by_address_payload(address: &str) -> Value {
    let lower = address.to_lowercase();
    match lookup_by_address(&lower) {
        Some(entry) => json!({
            "address": lower,
            "symbol": entry.symbol,
            "name": entry.name,
            "decimals": entry.decimals,
            "found": true,
        }),
        None => json!({
            "address": lower,
            "found": false,
            "note": "address not in BaseQL registry",
        }),
    }
}

pub fn template_payload(key: &str) -> Value {
    match get_template(key) {
        Some(template) => json!(template),
        None => json!({
            "error": format!("Not found. Available: {}", list_template_keys().join(", "))
        }),
    }
}
