// src/config.rs

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_SQL_API_URL: &str =
    "https://api.cdp.coinbase.com/platform/v2/data/query/run";
pub const DEFAULT_ETH_RPC_URL: &str = "https://rpc.flashbots.net";
pub const DEFAULT_PRICE_API_URL: &str =
    "https://api.coinbase.com/api/v3/brokerage/market/products/";

// All configuration, loaded once at startup from the environment / .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub host: String,
    pub port: u16,

    // CDP SQL API credentials (per-call JWT signing)
    pub cdp_api_key_id: String,
    pub cdp_api_key_secret: String,

    // External services
    pub sql_api_url: String,
    /// Ethereum mainnet RPC used for ENS resolution. The default (Flashbots)
    /// resolves both ENS names and Basenames forward.
    pub eth_rpc_url: String,
    pub price_api_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("PORT must be a valid number")?,

            cdp_api_key_id: env::var("CDP_API_KEY_ID")
                .context("CDP_API_KEY_ID must be set for SQL API authentication")?,
            cdp_api_key_secret: env::var("CDP_API_KEY_SECRET")
                .context("CDP_API_KEY_SECRET must be set for SQL API authentication")?,

            sql_api_url: env::var("SQL_API_URL")
                .unwrap_or_else(|_| DEFAULT_SQL_API_URL.to_string()),
            eth_rpc_url: env::var("ETH_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_ETH_RPC_URL.to_string()),
            price_api_url: env::var("PRICE_API_URL")
                .unwrap_or_else(|_| DEFAULT_PRICE_API_URL.to_string()),
        })
    }

    /// Socket address the HTTP server binds. All interfaces by default so
    /// containerized deployments work without extra configuration.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid HOST/PORT combination: {}:{}", self.host, self.port))
    }
}
