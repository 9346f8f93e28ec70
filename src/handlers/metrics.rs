use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;

use crate::AppState;

/// Handlers are in-memory CRUD, so latencies cluster well under 100ms; the
/// tail buckets exist for the analyze endpoint once it calls a real model.
const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

pub struct MetricsState {
    pub handle: PrometheusHandle,
}

/// Install the process-global Prometheus recorder. Call once at startup.
pub fn setup_metrics_recorder() -> MetricsState {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )
        .expect("failed to set histogram buckets")
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    MetricsState { handle }
}

/// GET /metrics - Prometheus exposition format
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, state.metrics.handle.render())
}
