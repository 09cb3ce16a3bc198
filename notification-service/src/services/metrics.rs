//! Metrics collection for notification-service.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once, from `main`.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to install Prometheus recorder: {}",
                e
            ))
        })?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("Metrics handle already initialized")))
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count one handled notification by outcome (`success` / `error`).
pub fn record_notification(status: &'static str) {
    metrics::counter!("notifications_total", "status" => status).increment(1);
}
