//! Passthrough client for the CDP SQL API.
//!
//! The SQL text is forwarded verbatim; no validation or rewriting happens
//! here. Every failure path comes back as a structured JSON value so the
//! dispatcher never sees a raw fault from this module.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use super::auth::{self, JwtRequest};

pub struct SqlClient {
    http: Client,
    endpoint: Url,
    key_id: String,
    key_secret: String,
}

impl SqlClient {
    pub fn new(endpoint: &str, key_id: &str, key_secret: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).context("invalid SQL API URL")?;
        endpoint.host_str().context("SQL API URL has no host")?;
        Ok(Self {
            http: Client::new(),
            endpoint,
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
        })
    }

    /// Execute a raw SQL query. Returns `{results, rowCount,
    /// executionTimeMs}` on success, `{error, details?}` on any failure.
    pub async fn run(&self, sql: &str) -> Value {
        let host = match self.endpoint.host_str() {
            Some(h) => h,
            None => return json!({ "error": "SQL API URL has no host" }),
        };
        let jwt_request = JwtRequest {
            key_id: &self.key_id,
            method: "POST",
            host,
            path: self.endpoint.path(),
        };
        let jwt = match auth::sign_jwt(
            &jwt_request,
            &self.key_secret,
            auth::unix_now(),
            &auth::random_nonce(),
        ) {
            Ok(token) => token,
            Err(e) => return json!({ "error": format!("JWT generation failed: {}", e) }),
        };

        debug!("Running SQL query ({} bytes)", sql.len());

        let response = match self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(jwt)
            .json(&json!({ "sql": sql }))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return json!({ "error": format!("Query execution failed: {}", e) }),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return json!({
                "error": format!("SQL API returned {}", status.as_u16()),
                "details": body,
            });
        }

        let data: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => return json!({ "error": format!("Invalid SQL API response: {}", e) }),
        };

        json!({
            "results": data.get("result").cloned().unwrap_or(Value::Null),
            "rowCount": data.pointer("/metadata/rowCount").cloned().unwrap_or(Value::Null),
            "executionTimeMs": data.pointer("/metadata/executionTimeMs").cloned().unwrap_or(Value::Null),
        })
    }
}
