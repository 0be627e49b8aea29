//! Token pricing from the Coinbase Exchange API.
//!
//! The full product list is cached in-process with a five minute TTL. A
//! refresh replaces the whole snapshot behind an `Arc`, so readers either
//! see the old list or the new one, never a partial update. A failed
//! refetch falls back to the last good snapshot; callers with no snapshot
//! at all just see "not found" for every symbol.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::warn;

pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

const SOURCE: &str = "Coinbase Exchange API";
const CEX_NOTE: &str = "CEX pricing - may differ from onchain DEX prices on Base";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub price_percentage_change_24h: String,
    #[serde(default)]
    pub volume_24h: String,
    #[serde(default)]
    pub base_name: String,
    #[serde(default)]
    pub quote_name: String,
    #[serde(default)]
    pub base_currency_id: String,
    #[serde(default)]
    pub quote_currency_id: String,
}

struct CacheSlot {
    products: Arc<Vec<Product>>,
    fetched_at: Instant,
}

pub struct PriceClient {
    http: Client,
    products_url: String,
    ttl: Duration,
    cache: RwLock<Option<CacheSlot>>,
}

impl PriceClient {
    pub fn new(products_url: &str) -> Self {
        Self::with_ttl(products_url, CACHE_TTL)
    }

    pub fn with_ttl(products_url: &str, ttl: Duration) -> Self {
        Self {
            http: Client::new(),
            products_url: products_url.to_string(),
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Current product snapshot plus whether it was served from a fresh
    /// cache. Refetches when the TTL has elapsed; serves the stale snapshot
    /// when the refetch fails.
    async fn snapshot(&self) -> (Arc<Vec<Product>>, bool) {
        {
            let cache = self.cache.read().await;
            if let Some(slot) = cache.as_ref() {
                if slot.fetched_at.elapsed() < self.ttl {
                    return (Arc::clone(&slot.products), true);
                }
            }
        }

        match self.fetch_products().await {
            Ok(products) => {
                let products = Arc::new(products);
                let mut cache = self.cache.write().await;
                *cache = Some(CacheSlot {
                    products: Arc::clone(&products),
                    fetched_at: Instant::now(),
                });
                (products, true)
            }
            Err(e) => {
                warn!("Failed to fetch Coinbase products: {}", e);
                let cache = self.cache.read().await;
                match cache.as_ref() {
                    Some(slot) => (Arc::clone(&slot.products), false),
                    None => (Arc::new(Vec::new()), false),
                }
            }
        }
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, reqwest::Error> {
        #[derive(Deserialize)]
        struct ProductList {
            #[serde(default)]
            products: Vec<Product>,
        }
        let list: ProductList = self
            .http
            .get(&self.products_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(list.products)
    }

    pub async fn get_price(&self, symbol: &str) -> Value {
        let (products, _) = self.snapshot().await;
        let normalized = symbol.to_uppercase();

        match find_pair(&products, &normalized) {
            Some(pair) => json!({
                "symbol": normalized,
                "name": pair.base_name,
                "price_usd": parse_f64(&pair.price),
                "change_24h_percent": parse_f64(&pair.price_percentage_change_24h).unwrap_or(0.0),
                "volume_24h": parse_f64(&pair.volume_24h).unwrap_or(0.0),
                "trading_pair": pair.product_id,
                "quote_currency": pair.quote_name,
                "source": SOURCE,
                "note": CEX_NOTE,
            }),
            None => json!({
                "symbol": normalized,
                "price": Value::Null,
                "error": "Token not found on Coinbase Exchange",
                "note": "This pricing data is from Coinbase CEX, not onchain DEX prices",
            }),
        }
    }

    /// Batch quote over one shared snapshot. Per-symbol misses come back as
    /// embedded errors; the batch itself never fails.
    pub async fn get_prices(&self, symbols: &[String]) -> Value {
        let (products, cached) = self.snapshot().await;

        let prices: Vec<Value> = symbols
            .iter()
            .map(|symbol| {
                let normalized = symbol.to_uppercase();
                match find_pair(&products, &normalized) {
                    Some(pair) => json!({
                        "symbol": normalized,
                        "name": pair.base_name,
                        "price_usd": parse_f64(&pair.price),
                        "change_24h_percent": parse_f64(&pair.price_percentage_change_24h).unwrap_or(0.0),
                    }),
                    None => json!({
                        "symbol": normalized,
                        "price_usd": Value::Null,
                        "error": "Not found on Coinbase",
                    }),
                }
            })
            .collect();

        json!({
            "prices": prices,
            "source": SOURCE,
            "cached": cached,
            "note": CEX_NOTE,
        })
    }
}

/// Pick the trading pair for a symbol: a USD-quoted pair wins over a
/// USDC-quoted one when both exist.
fn find_pair<'a>(products: &'a [Product], symbol: &str) -> Option<&'a Product> {
    let usd = products
        .iter()
        .find(|p| p.base_currency_id == symbol && p.quote_currency_id == "USD");
    let usdc = products
        .iter()
        .find(|p| p.base_currency_id == symbol && p.quote_currency_id == "USDC");
    usd.or(usdc)
}

fn parse_f64(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}
