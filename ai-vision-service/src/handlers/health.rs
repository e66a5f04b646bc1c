use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::health::{HealthStatus, ReadinessStatus};
use service_core::metrics::get_metrics;

use crate::startup::AppState;
use crate::SERVICE_NAME;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "Observability"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok(SERVICE_NAME))
}

/// Readiness probe: healthy only while the analyzer is.
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Analyzer is ready", body = ReadinessStatus),
        (status = 503, description = "Analyzer is unavailable", body = ReadinessStatus)
    ),
    tag = "Observability"
)]
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let backend = state.analyzer.name();
    match state.analyzer.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessStatus::ready(SERVICE_NAME, backend)),
        ),
        Err(e) => {
            tracing::warn!(backend, error = %e, "Condition analyzer not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessStatus::unavailable(SERVICE_NAME, backend)),
            )
        }
    }
}

/// Prometheus metrics
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain")
    ),
    tag = "Observability"
)]
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
