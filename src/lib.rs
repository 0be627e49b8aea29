// src/lib.rs

use std::sync::Arc;

pub mod advisor;
pub mod api;
pub mod clients;
pub mod config;
pub mod mcp;
pub mod registry;
pub mod tools;
pub mod utils;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// ENS/Basename resolution client
    pub ens: Arc<clients::EnsClient>,
    /// Coinbase Exchange price client with the product cache
    pub price: Arc<clients::PriceClient>,
    /// CDP SQL API passthrough client
    pub sql: Arc<clients::SqlClient>,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let ens = Arc::new(clients::EnsClient::new(&config.eth_rpc_url)?);
        let price = Arc::new(clients::PriceClient::new(&config.price_api_url));
        let sql = Arc::new(clients::SqlClient::new(
            &config.sql_api_url,
            &config.cdp_api_key_id,
            &config.cdp_api_key_secret,
        )?);
        Ok(Self {
            config,
            ens,
            price,
            sql,
        })
    }
}
