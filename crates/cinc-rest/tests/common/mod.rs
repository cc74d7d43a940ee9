//! Common test utilities and fixtures for integration tests
//!
//! Bodies mirror what the CINC API returns.

#![allow(dead_code)]

use cinc_rest::{ClientConfig, RestClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

/// Retry delay short enough to keep retry tests fast
pub const FAST_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Start a stub server and a client pointed at its `/v2` prefix
pub async fn setup(retry_attempts: u32) -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let client = RestClient::new(config_for(&server, retry_attempts)).unwrap();
    (server, client)
}

/// Config targeting a stub server
pub fn config_for(server: &MockServer, retry_attempts: u32) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(format!("{}/v2", server.uri()))
        .with_retry_attempts(retry_attempts)
        .with_retry_delay(FAST_RETRY_DELAY)
}

pub fn asset_json() -> Value {
    json!({
        "id": "a-1",
        "name": "Main Street Condo",
        "type": "property",
        "value": 250000.5,
        "currency": "USD",
        "createdAt": "2024-01-15T10:30:00Z",
        "updatedAt": "2024-02-01T08:00:00Z"
    })
}

pub fn market_json() -> Value {
    json!({
        "id": "m-1",
        "name": "Gold",
        "symbol": "XAU",
        "lastPrice": 2034.25,
        "change": 12.5,
        "changePercent": 0.62,
        "volume": 18250.75,
        "marketCap": 13500000000.5
    })
}

pub fn market_response_json() -> Value {
    json!({
        "markets": [market_json()],
        "totalMarkets": 1,
        "totalVolume": 18250.75
    })
}

pub fn portfolio_json() -> Value {
    json!({
        "id": "p-1",
        "userId": "u-1",
        "assets": [
            { "id": "a-1", "name": "Main Street Condo", "quantity": 1.0, "value": 250000.5 }
        ],
        "createdAt": "2024-01-15T10:30:00Z"
    })
}

pub fn portfolio_response_json() -> Value {
    json!({
        "portfolio": portfolio_json(),
        "message": "ok"
    })
}

pub fn auth_response_json(token: &str) -> Value {
    json!({
        "token": token,
        "user": {
            "id": "u-1",
            "username": "jdoe",
            "email": "jdoe@example.com"
        }
    })
}
