use std::time::Duration;

use dxs_client::{ClientConfig, ClientError, DxsClient, ReadingSource};
use serde_json::json;
use types::RawReading;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DxsClient {
    let config = ClientConfig {
        host: server.address().to_string(),
        ..ClientConfig::default()
    };
    DxsClient::new(config).expect("client")
}

#[tokio::test]
async fn fetch_returns_value_for_requested_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .and(query_param("dxsEntries", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dxsEntries": [{"dxsId": 42, "value": "123.4"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reading = client.fetch(42).await.expect("fetch");
    assert_eq!(reading, RawReading::Text("123.4".to_string()));
}

#[tokio::test]
async fn fetch_missing_id_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dxsEntries": [{"dxsId": 42, "value": "123.4"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(7).await.expect_err("missing id");
    assert!(matches!(err, ClientError::MissingEntry { dxs_id: 7, .. }));
    assert!(err.is_protocol());
}

#[tokio::test]
async fn fetch_non_json_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(42).await.expect_err("not json");
    assert!(matches!(err, ClientError::InvalidJson { .. }));
    assert!(err.is_protocol());
}

#[tokio::test]
async fn fetch_slow_device_is_transport_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"dxsEntries": [{"dxsId": 42, "value": 1}]}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        host: server.address().to_string(),
        timeout_ms: 200,
        ..ClientConfig::default()
    };
    let client = DxsClient::new(config).expect("client");
    let err = client.fetch(42).await.expect_err("timeout");
    assert!(matches!(err, ClientError::Timeout { timeout_ms: 200 }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn fetch_unreachable_device_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let config = ClientConfig {
        host: addr.to_string(),
        timeout_ms: 1_000,
        ..ClientConfig::default()
    };
    let client = DxsClient::new(config).expect("client");
    let err = client.fetch(42).await.expect_err("refused");
    assert!(err.is_transport());
}

#[tokio::test]
async fn fetch_sends_basic_credentials_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dxsEntries": [{"dxsId": 67110400, "value": 50.02}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        host: server.address().to_string(),
        username: Some("user".to_string()),
        password: Some("pass".to_string()),
        ..ClientConfig::default()
    };
    let client = DxsClient::new(config).expect("client");
    let reading = client.fetch(67110400).await.expect("fetch");
    assert_eq!(reading, RawReading::Number(50.02));
}

#[tokio::test]
async fn fetch_many_requests_all_ids_in_one_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .and(query_param("dxsEntries", "16780032"))
        .and(query_param("dxsEntries", "67110400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dxsEntries": [
                {"dxsId": 16780032, "value": 3},
                {"dxsId": 67110400, "value": "49.98"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let readings = client
        .fetch_many(&[16780032, 67110400, 251658496])
        .await
        .expect("fetch many");
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[&16780032], RawReading::Number(3.0));
    assert_eq!(readings[&67110400], RawReading::Text("49.98".to_string()));
    assert!(!readings.contains_key(&251658496));
}

#[tokio::test]
async fn reading_source_trait_delegates_to_http_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dxsEntries": [{"dxsId": 42, "value": "1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source: Box<dyn ReadingSource> = Box::new(client_for(&server));
    let reading = source.fetch(42).await.expect("fetch");
    assert_eq!(reading, RawReading::Text("1".to_string()));
}
