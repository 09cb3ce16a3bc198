use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::health::{ComponentHealth, HealthReport, HealthStatus};
use std::collections::BTreeMap;

/// Body returned by every `/health` probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<BTreeMap<String, ComponentHealth>>,
}

impl HealthResponse {
    /// Bare `UP` without component detail, for liveness and startup.
    pub fn up() -> Self {
        Self {
            status: HealthStatus::Up,
            timestamp: Utc::now(),
            components: None,
        }
    }
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status,
            timestamp: Utc::now(),
            components: Some(report.components),
        }
    }
}
