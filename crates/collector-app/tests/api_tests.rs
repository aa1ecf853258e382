use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

use collector_app::api::{router, AppState};
use collector_app::probe_device;
use dxs_client::{ClientConfig, DxsClient};
use poller_actor::MeasurementRegistry;

const GRID_FREQUENCY: u32 = 67110400;
const INVERTER_STATE: u32 = 16780032;
const UPTIME: u32 = 251658496;

/// Answers every requested dxsId except the ones listed in `missing`.
struct InverterResponder {
    missing: HashSet<u32>,
}

impl Respond for InverterResponder {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let entries: Vec<Value> = request
            .url
            .query_pairs()
            .filter(|(key, _)| key == "dxsEntries")
            .filter_map(|(_, value)| value.parse::<u32>().ok())
            .filter(|id| !self.missing.contains(id))
            .map(|id| match id {
                GRID_FREQUENCY => json!({"dxsId": id, "value": "50.013"}),
                INVERTER_STATE => json!({"dxsId": id, "value": 3}),
                _ => json!({"dxsId": id, "value": 1500}),
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({ "dxsEntries": entries }))
    }
}

async fn mock_inverter(missing: &[u32]) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dxs.json"))
        .respond_with(InverterResponder {
            missing: missing.iter().copied().collect(),
        })
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> DxsClient {
    DxsClient::new(ClientConfig {
        host: server.address().to_string(),
        ..ClientConfig::default()
    })
    .expect("client")
}

fn app_for(server: &MockServer) -> (Router, Arc<MeasurementRegistry>) {
    let registry = Arc::new(MeasurementRegistry::from_catalog(
        Arc::new(client_for(server)),
        Duration::from_secs(10),
    ));
    let metrics = PrometheusBuilder::new().build_recorder().handle();
    let app = router(AppState {
        registry: registry.clone(),
        metrics,
    });
    (app, registry)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

#[tokio::test]
async fn refresh_endpoint_returns_converted_value() {
    let server = mock_inverter(&[]).await;
    let (app, _) = app_for(&server);

    let (status, body) = get(&app, &format!("/measurements/{GRID_FREQUENCY}")).await;
    assert_eq!(status, StatusCode::OK);
    let view: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(view["unique_id"], "kostal_piko_grid_frequency_67110400");
    assert_eq!(view["unit"], "Hz");
    assert_eq!(view["state"]["available"], true);
    assert_eq!(view["state"]["last_value"], json!({"kind": "number", "value": 50.01}));

    let (_, body) = get(&app, &format!("/measurements/{INVERTER_STATE}")).await;
    let view: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(
        view["state"]["last_value"],
        json!({"kind": "state", "value": "Input (MPP)"})
    );
}

#[tokio::test]
async fn missing_reading_is_reported_unavailable() {
    let server = mock_inverter(&[UPTIME]).await;
    let (app, _) = app_for(&server);

    let (status, body) = get(&app, &format!("/measurements/{UPTIME}")).await;
    assert_eq!(status, StatusCode::OK);
    let view: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(view["state"]["available"], false);
    assert!(view["state"]["last_value"].is_null());
}

#[tokio::test]
async fn repeated_refresh_inside_window_hits_device_once() {
    let server = mock_inverter(&[]).await;
    let (app, _) = app_for(&server);

    for _ in 0..3 {
        let (status, _) = get(&app, &format!("/measurements/{GRID_FREQUENCY}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_rejected() {
    let server = mock_inverter(&[]).await;
    let (app, _) = app_for(&server);

    let (status, _) = get(&app, "/measurements/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/measurements/grid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_endpoint_reports_cached_states_without_fetching() {
    let server = mock_inverter(&[]).await;
    let (app, registry) = app_for(&server);
    registry.refresh_all().await;
    let fetched = server.received_requests().await.expect("recording").len();
    assert_eq!(fetched, registry.len());

    let (status, body) = get(&app, "/measurements").await;
    assert_eq!(status, StatusCode::OK);
    let views: Vec<Value> = serde_json::from_slice(&body).expect("json");
    assert_eq!(views.len(), registry.len());
    assert!(views.iter().all(|view| view["state"]["available"] == true));
    assert_eq!(views[0]["key"], "kostal_piko_total_dc_input");
    assert_eq!(views[0]["state"]["last_value"], json!({"kind": "number", "value": 1.5}));

    let after = server.received_requests().await.expect("recording").len();
    assert_eq!(after, fetched);
}

#[tokio::test]
async fn health_and_metrics_endpoints_respond() {
    let server = mock_inverter(&[]).await;
    let (app, _) = app_for(&server);

    let (status, body) = get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, _) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn probe_lists_ids_the_device_left_out() {
    let server = mock_inverter(&[UPTIME, GRID_FREQUENCY]).await;
    let client = client_for(&server);

    let report = probe_device(&client).await.expect("probe");
    assert_eq!(report.missing, vec![GRID_FREQUENCY, UPTIME]);
    assert_eq!(report.received, measurement_catalog::measurements().len() - 2);

    let requests = server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 1);
}
