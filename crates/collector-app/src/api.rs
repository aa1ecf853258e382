use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;

use measurement_catalog::MeasurementDefinition;
use poller_actor::{Measurement, MeasurementRegistry};
use types::MeasurementState;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MeasurementRegistry>,
    pub metrics: PrometheusHandle,
}

#[derive(Debug, Serialize)]
pub struct MeasurementView {
    pub unique_id: String,
    #[serde(flatten)]
    pub definition: &'static MeasurementDefinition,
    pub state: MeasurementState,
}

impl MeasurementView {
    fn new(definition: &'static MeasurementDefinition, state: MeasurementState) -> Self {
        Self {
            unique_id: definition.unique_id(),
            definition,
            state,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(render_metrics))
        .route("/measurements", get(list_measurements))
        .route("/measurements/:id", get(refresh_measurement))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

/// Cached state of every measurement; never touches the device.
async fn list_measurements(State(state): State<AppState>) -> Json<Vec<MeasurementView>> {
    let views = state
        .registry
        .snapshot()
        .await
        .into_iter()
        .map(|(definition, state)| MeasurementView::new(definition, state))
        .collect();
    Json(views)
}

async fn refresh_measurement(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Response {
    let Some(measurement) = state.registry.get(id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown measurement {id}") })),
        )
            .into_response();
    };

    let definition = measurement.definition();
    let current = measurement.refresh().await;
    Json(MeasurementView::new(definition, current)).into_response()
}
