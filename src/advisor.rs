//! Query-window advisor.
//!
//! Popular tokens have transfer history deep enough that an unbounded scan
//! trips the SQL API's data-read ceiling. This module estimates how old a
//! token's dataset is and suggests a time window that stays under the
//! ceiling. The suggestion is informational only; nothing here (or anywhere
//! else in this server) enforces it on later queries.

use serde_json::{json, Value};

use crate::clients::SqlClient;

/// Hard ceiling on the suggested window, matching the backing store's
/// scan-cost constraint.
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Safety margin over the observed age, against clock/partition skew at the
/// dataset boundary.
const AGE_MARGIN: f64 = 1.2;

/// `min(ceil(age * 1.2), 365)` for any non-negative age.
pub fn suggested_window_days(age_in_days: i64) -> i64 {
    let widened = (age_in_days.max(0) as f64 * AGE_MARGIN).ceil() as i64;
    widened.min(MAX_WINDOW_DAYS)
}

fn age_query(token_address: &str) -> String {
    format!(
        "\
SELECT
  MIN(block_timestamp) as first_transfer,
  MAX(block_timestamp) as last_transfer,
  COUNT(*) as total_transfers,
  dateDiff('day', MIN(block_timestamp), NOW()) as days_old
FROM base.transfers
WHERE token_address = '{}'",
        token_address.to_lowercase()
    )
}

/// Estimate a token's age from its first observed transfer and derive a
/// safe query window. Computed fresh per request, never cached.
pub async fn token_age(sql: &SqlClient, token_address: &str) -> Value {
    let result = sql.run(&age_query(token_address)).await;

    if result.get("error").is_some() {
        return result;
    }

    let row = match result["results"].as_array().and_then(|rows| rows.first()) {
        Some(row) => row,
        None => return json!({ "error": "No transfers found" }),
    };

    let days_old = match parse_days(&row["days_old"]) {
        Some(days) => days,
        None => return json!({ "error": "No transfers found" }),
    };
    let suggested = suggested_window_days(days_old);

    json!({
        "first_transfer": row["first_transfer"],
        "days_old": days_old,
        "suggested_query_window": format!("{} days", suggested),
        "recommendation": format!("Use {} in queries", suggested),
    })
}

// the SQL API returns numerics either as numbers or strings
fn parse_days(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}
