//! Kubernetes-style probes.
//!
//! Liveness and startup never touch the component registry, so a failing
//! dependency cannot get the pod restarted.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::health::HealthRegistry;

use crate::models::HealthResponse;
use crate::services::get_metrics;
use crate::startup::AppState;

/// `GET /health/liveness`
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// `GET /health/startup`
pub async fn startup_check() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// `GET /health/readiness`
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    aggregate(&state.health).await
}

/// `GET /health`, the documented overall status.
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    aggregate(&state.health).await
}

async fn aggregate(registry: &HealthRegistry) -> (StatusCode, Json<HealthResponse>) {
    let report = registry.check_all().await;
    let code = if report.status.is_up() {
        StatusCode::OK
    } else {
        tracing::warn!(components = ?report.components, "Service reported DOWN");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(HealthResponse::from(report)))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
