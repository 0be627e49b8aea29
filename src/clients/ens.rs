//! ENS and Basename resolution over an Ethereum mainnet RPC.
//!
//! Forward resolution goes through the mainnet registry, which covers
//! Basenames (`*.base.eth`) via wildcard resolution. Reverse resolution
//! only consults the mainnet reverse registrar, so an address whose only
//! name is a Basename comes back `name: null`. That asymmetry matches the
//! upstream resolver behavior and is intentional.

use anyhow::{Context, Result};
use ethers::providers::{Http, Middleware, Provider, ProviderError};
use ethers::types::Address;
use ethers::utils::to_checksum;
use futures::future::join_all;
use serde_json::{json, Value};
use std::future::Future;
use tracing::debug;

pub struct EnsClient {
    provider: Provider<Http>,
}

impl EnsClient {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url).context("invalid ETH RPC URL")?;
        Ok(Self { provider })
    }

    /// Forward resolution: name to address.
    pub async fn resolve_name(&self, name: &str) -> Value {
        match self.provider.resolve_name(name).await {
            Ok(address) => json!({
                "name": name,
                "address": to_checksum(&address, None),
            }),
            Err(e) if is_missing_record(&e) => json!({
                "error": format!("could not resolve: {}", name),
            }),
            Err(e) => json!({
                "error": format!("ENS resolution failed: {}", e),
                "name": name,
            }),
        }
    }

    /// Reverse resolution: a missing reverse record is a valid null result,
    /// only a provider failure carries an error field.
    pub async fn name_for_address(&self, address: &str) -> Value {
        match self.reverse_lookup(address).await {
            Ok(name) => json!({ "address": address, "name": name }),
            Err(e) => json!({
                "address": address,
                "name": Value::Null,
                "error": format!("Reverse lookup failed: {}", e),
            }),
        }
    }

    /// Batch reverse resolution with per-item isolation: every address is
    /// looked up concurrently and a failure on one degrades that entry to
    /// `name: null` without touching the rest.
    pub async fn names_for_addresses(&self, addresses: &[String]) -> Value {
        batch_reverse(addresses, |address| async move {
            self.reverse_lookup(&address).await
        })
        .await
    }

    async fn reverse_lookup(&self, address: &str) -> Result<Option<String>, String> {
        let parsed: Address = address
            .parse()
            .map_err(|_| format!("invalid address: {}", address))?;
        match self.provider.lookup_address(parsed).await {
            Ok(name) => Ok(Some(name)),
            Err(e) if is_missing_record(&e) => {
                debug!("no reverse record for {}", address);
                Ok(None)
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

// ethers reports "no resolver / no record" through EnsError rather than a
// transport failure; anything else is a real provider error.
fn is_missing_record(e: &ProviderError) -> bool {
    matches!(
        e,
        ProviderError::EnsError(_) | ProviderError::EnsNotOwned(_)
    )
}

/// Fan-out combinator behind the batch lookup: joins N independently-failable
/// lookups into one ordered result list, never short-circuiting.
pub async fn batch_reverse<F, Fut>(addresses: &[String], lookup: F) -> Value
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Option<String>, String>>,
{
    let results: Vec<Value> = join_all(addresses.iter().map(|address| {
        let fut = lookup(address.clone());
        async move {
            match fut.await {
                Ok(name) => json!({ "address": address, "name": name }),
                Err(e) => json!({ "address": address, "name": Value::Null, "error": e }),
            }
        }
    }))
    .await;

    let resolved = results.iter().filter(|r| !r["name"].is_null()).count();

    json!({
        "results": results,
        "summary": {
            "total": addresses.len(),
            "resolved": resolved,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn batch_isolates_the_one_failing_lookup() {
        let addresses: Vec<String> = (0..4).map(|i| format!("0x{:040x}", i)).collect();
        let failing = addresses[2].clone();

        let result = batch_reverse(&addresses, |address| {
            let failing = failing.clone();
            async move {
                if address == failing {
                    Err("Lookup failed".to_string())
                } else {
                    Ok(Some(format!("{}.eth", &address[..6])))
                }
            }
        })
        .await;

        let results = result["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        // input order preserved
        for (i, entry) in results.iter().enumerate() {
            assert_eq!(entry["address"], addresses[i].as_str());
        }
        assert!(results[2]["name"].is_null());
        assert_eq!(results[2]["error"], "Lookup failed");
        assert_eq!(result["summary"]["total"], 4);
        assert_eq!(result["summary"]["resolved"], 3);
    }

    #[tokio::test]
    async fn missing_records_count_as_unresolved_not_errors() {
        let addresses: Vec<String> = (0..2).map(|i| format!("0x{:040x}", i)).collect();
        let result = batch_reverse(&addresses, |_| async { Ok(None) }).await;

        let results = result["results"].as_array().unwrap();
        assert!(results.iter().all(|r| r["name"].is_null()));
        assert!(results.iter().all(|r| r.get("error").is_none()));
        assert_eq!(result["summary"]["resolved"], 0);
    }

    #[tokio::test]
    async fn empty_batch_is_a_valid_batch() {
        let result = batch_reverse(&[], |_| async { Ok(None) }).await;
        assert_eq!(result["summary"]["total"], 0);
        assert_eq!(result["results"].as_array().unwrap().len(), 0);
    }
}
