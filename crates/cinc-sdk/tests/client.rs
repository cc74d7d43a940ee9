//! Integration tests for the CINC client facade
//!
//! Exercises session handling across services against a local stub server.

use cinc_sdk::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, CincClient) {
    let server = MockServer::start().await;
    let client = CincClient::builder()
        .with_base_url(server.uri())
        .with_retry_attempts(1)
        .with_retry_delay(Duration::from_millis(10))
        .build()
        .unwrap();
    (server, client)
}

fn auth_response(token: &str) -> serde_json::Value {
    json!({
        "token": token,
        "user": { "id": "u-1", "username": "jdoe", "email": "jdoe@example.com" }
    })
}

#[tokio::test]
async fn test_authenticate_installs_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_response("T")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/assets"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "a-1",
            "name": "Main Street Condo",
            "type": "property",
            "value": 250000.5,
            "currency": "USD"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let session = client
        .authenticate("jdoe@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(session.user.email, "jdoe@example.com");
    assert!(client.is_authenticated());

    let assets = client.assets().get_assets().await.unwrap();
    assert_eq!(assets[0].value, dec!(250000.5));
}

#[tokio::test]
async fn test_failed_authenticate_keeps_previous_token() {
    let (server, client) = setup().await;
    client.set_auth_token("old").unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/market/trends"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .authenticate("jdoe@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(client.is_authenticated());

    let trends = client.markets().get_market_trends().await.unwrap();
    assert!(trends.is_empty());
}

#[tokio::test]
async fn test_logout_clears_token() {
    let (server, client) = setup().await;
    client.set_auth_token("T").unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "bye" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/portfolios/u-1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    client.logout().await.unwrap();
    assert!(!client.is_authenticated());

    let err = client.portfolios().get_portfolio("u-1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[1].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_logout_clears_token_on_failure() {
    let (server, client) = setup().await;
    client.set_auth_token("T").unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let err = client.logout().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_update_config_reaches_services() {
    let (old_server, client) = setup().await;
    let new_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "markets": [],
            "totalMarkets": 0,
            "totalVolume": 0.0
        })))
        .expect(1)
        .mount(&new_server)
        .await;

    client
        .update_config(
            ConfigUpdate::new()
                .with_base_url(new_server.uri())
                .with_header("X-Tenant", "acme"),
        )
        .unwrap();

    let data = client.markets().get_market_data().await.unwrap();
    assert_eq!(data.total_markets, 0);
    assert!(old_server.received_requests().await.unwrap().is_empty());

    let requests = new_server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers["x-tenant"], "acme");
}

#[tokio::test]
async fn test_builder_token_sent() {
    let server = MockServer::start().await;
    let client = CincClient::builder()
        .with_base_url(server.uri())
        .with_token("preset")
        .build()
        .unwrap();

    Mock::given(method("DELETE"))
        .and(path("/assets/a-1"))
        .and(header("authorization", "Bearer preset"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.assets().delete_asset("a-1").await.unwrap();
}
