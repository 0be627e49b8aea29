//! Tests for the HTTP dispatch surface

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    routing::{get, post},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use tower::ServiceExt;

use baseql_mcp_server::{
    api::tools::{call_tool_handler, list_tools_handler, root_handler, rpc_handler},
    config::Config,
    AppState,
};

fn test_secret() -> String {
    STANDARD.encode([7u8; 32])
}

fn create_test_app(sql_api_url: &str, price_api_url: &str) -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        cdp_api_key_id: "organizations/test/apiKeys/key-1".to_string(),
        cdp_api_key_secret: test_secret(),
        sql_api_url: sql_api_url.to_string(),
        eth_rpc_url: "http://127.0.0.1:9".to_string(),
        price_api_url: price_api_url.to_string(),
    };
    let state = AppState::new(config).expect("test state");

    Router::new()
        .route("/", get(root_handler))
        .route("/tools", get(list_tools_handler))
        .route("/call", post(call_tool_handler))
        .route("/rpc", post(rpc_handler))
        .with_state(state)
}

fn default_app() -> Router {
    // registry/dispatch tests never reach an upstream
    create_test_app("http://127.0.0.1:9/query/run", "http://127.0.0.1:9/products")
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn root_reports_server_identity() {
    let (status, body) = get_json(default_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "BaseQL MCP Server");
    assert!(body["endpoints"]["POST /call"].is_string());
}

#[tokio::test]
async fn tools_endpoint_lists_the_full_catalog() {
    let (status, body) = get_json(default_app(), "/tools").await;
    assert_eq!(status, StatusCode::OK);
    let tools = body["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 13);
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    for expected in [
        "get_schema",
        "get_capabilities",
        "get_sql_best_practices",
        "get_contract",
        "get_contract_by_address",
        "get_query_template",
        "get_token_age",
        "run_sql_query",
        "resolve_name",
        "get_name_for_address",
        "get_names_for_addresses",
        "get_token_price",
        "get_multiple_token_prices",
    ] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn missing_tool_parameter_is_400() {
    let (status, body) = post_json(default_app(), "/call", json!({"params": {}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'tool' parameter");
}

#[tokio::test]
async fn unknown_tool_is_404() {
    let (status, body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "melt_the_chain", "params": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("melt_the_chain"));
}

#[tokio::test]
async fn missing_required_argument_is_400() {
    let (status, body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "get_contract", "params": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("symbol"));
}

#[tokio::test]
async fn lowercase_symbol_returns_canonical_entry() {
    let (status, body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "get_contract", "params": {"symbol": "usdc"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "USDC");
    assert_eq!(body["address"], "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913");
    assert_eq!(body["decimals"], 6);
}

#[tokio::test]
async fn unknown_symbol_lists_available_ones() {
    let (status, body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "get_contract", "params": {"symbol": "WAT"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("USDC"));
    assert!(message.contains("WETH"));
}

#[tokio::test]
async fn reverse_contract_lookup_is_case_insensitive() {
    let (status, body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "get_contract_by_address", "params": {"address": "0x833589FCD6EDB6E08F4C7C32D4F71B54BDA02913"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["symbol"], "USDC");
    assert_eq!(body["address"], "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913");
}

#[tokio::test]
async fn query_template_comes_back_with_sql() {
    let (status, body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "get_query_template", "params": {"templateKey": "token_holders"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["sql"].as_str().unwrap().contains("current_balance"));
    assert_eq!(body["parameters"][0], "token_address");
}

#[tokio::test]
async fn schema_is_served_statically() {
    let (status, body) = post_json(default_app(), "/call", json!({"tool": "get_schema"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["tables"]["base.transfers"].is_object());
}

#[tokio::test]
async fn sql_api_429_surfaces_as_structured_error() {
    let mock = mockito::mock("POST", "/sql_429")
        .with_status(429)
        .with_body("rate limited, slow down")
        .expect(1)
        .create();

    let sql_url = format!("{}/sql_429", mockito::server_url());
    let app = create_test_app(&sql_url, "http://127.0.0.1:9/products");

    let (status, body) = post_json(
        app,
        "/call",
        json!({"tool": "run_sql_query", "params": {"sql": "SELECT 1"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "SQL API returned 429");
    assert_eq!(body["details"], "rate limited, slow down");
    mock.assert();
}

#[tokio::test]
async fn sql_success_envelope_is_normalized() {
    let mock = mockito::mock("POST", "/sql_ok")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "result": [{"n": 1}],
                "metadata": {"rowCount": 1, "executionTimeMs": 12}
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let sql_url = format!("{}/sql_ok", mockito::server_url());
    let app = create_test_app(&sql_url, "http://127.0.0.1:9/products");

    let (status, body) = post_json(
        app,
        "/call",
        json!({"tool": "run_sql_query", "params": {"sql": "SELECT 1"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["n"], 1);
    assert_eq!(body["rowCount"], 1);
    assert_eq!(body["executionTimeMs"], 12);
    mock.assert();
}

#[tokio::test]
async fn sql_requests_carry_a_bearer_token() {
    let mock = mockito::mock("POST", "/sql_auth")
        .match_header(
            "authorization",
            mockito::Matcher::Regex("^Bearer ey".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"result": [], "metadata": {}}).to_string())
        .expect(1)
        .create();

    let sql_url = format!("{}/sql_auth", mockito::server_url());
    let app = create_test_app(&sql_url, "http://127.0.0.1:9/products");

    post_json(
        app,
        "/call",
        json!({"tool": "run_sql_query", "params": {"sql": "SELECT 1"}}),
    )
    .await;

    mock.assert();
}

#[tokio::test]
async fn token_age_with_no_transfers_is_a_soft_error() {
    let mock = mockito::mock("POST", "/sql_age_empty")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"result": [], "metadata": {"rowCount": 0}}).to_string())
        .expect(1)
        .create();

    let sql_url = format!("{}/sql_age_empty", mockito::server_url());
    let app = create_test_app(&sql_url, "http://127.0.0.1:9/products");

    let (status, body) = post_json(
        app,
        "/call",
        json!({"tool": "get_token_age", "params": {"token_address": "0xTOKEN"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No transfers found");
    mock.assert();
}

#[tokio::test]
async fn token_age_suggests_a_widened_window() {
    let mock = mockito::mock("POST", "/sql_age_100")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "result": [{
                    "first_transfer": "2025-05-17 00:00:00",
                    "last_transfer": "2025-08-24 00:00:00",
                    "total_transfers": "12345",
                    "days_old": 100
                }],
                "metadata": {"rowCount": 1}
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let sql_url = format!("{}/sql_age_100", mockito::server_url());
    let app = create_test_app(&sql_url, "http://127.0.0.1:9/products");

    let (status, body) = post_json(
        app,
        "/call",
        json!({"tool": "get_token_age", "params": {"token_address": "0xAbC0000000000000000000000000000000000001"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days_old"], 100);
    assert_eq!(body["suggested_query_window"], "120 days");
    assert_eq!(body["recommendation"], "Use 120 in queries");
    assert_eq!(body["first_transfer"], "2025-05-17 00:00:00");
    mock.assert();
}

#[tokio::test]
async fn batch_prices_never_fail_wholesale() {
    let mock = mockito::mock("GET", "/products_http")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "products": [{
                    "product_id": "ETH-USD",
                    "price": "2500.50",
                    "price_percentage_change_24h": "-1.2",
                    "volume_24h": "100000",
                    "base_name": "Ethereum",
                    "quote_name": "US Dollar",
                    "base_currency_id": "ETH",
                    "quote_currency_id": "USD"
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let price_url = format!("{}/products_http", mockito::server_url());
    let app = create_test_app("http://127.0.0.1:9/query/run", &price_url);

    let (status, body) = post_json(
        app,
        "/call",
        json!({"tool": "get_multiple_token_prices", "params": {"symbols": ["eth", "NOPE"]}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let prices = body["prices"].as_array().unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0]["symbol"], "ETH");
    assert_eq!(prices[0]["price_usd"], 2500.50);
    assert_eq!(prices[1]["symbol"], "NOPE");
    assert!(prices[1]["price_usd"].is_null());
    assert_eq!(prices[1]["error"], "Not found on Coinbase");
    mock.assert();
}

#[tokio::test]
async fn rpc_transport_rejects_unknown_methods_identically() {
    let (status, body) = post_json(
        default_app(),
        "/rpc",
        json!({"jsonrpc": "2.0", "id": 1, "method": "no/such"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn rpc_transport_rejects_unknown_tools_identically() {
    let (status, body) = post_json(
        default_app(),
        "/rpc",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "melt_the_chain", "arguments": {}}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32601);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("melt_the_chain"));
}

#[tokio::test]
async fn rpc_and_call_agree_on_contract_lookups() {
    let (_, http_body) = post_json(
        default_app(),
        "/call",
        json!({"tool": "get_contract", "params": {"symbol": "weth"}}),
    )
    .await;

    let (_, rpc_body) = post_json(
        default_app(),
        "/rpc",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "get_contract", "arguments": {"symbol": "weth"}}
        }),
    )
    .await;

    let rpc_text = rpc_body["result"]["content"][0]["text"].as_str().unwrap();
    let rpc_payload: Value = serde_json::from_str(rpc_text).unwrap();
    assert_eq!(rpc_payload, http_body);
}
