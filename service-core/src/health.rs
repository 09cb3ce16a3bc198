//! Component health aggregation for HTTP readiness probes.
//!
//! Each dependency worth reporting implements [`HealthCheck`]. A
//! [`HealthRegistry`] runs every registered check and folds the results into a
//! single [`HealthReport`]: the service is `UP` only while every component is.
//! A check that errors or panics marks its own component `DOWN` and never
//! fails the probe request itself.

use async_trait::async_trait;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Probe status as reported on the wire (`"UP"` / `"DOWN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

impl HealthStatus {
    pub fn is_up(self) -> bool {
        self == HealthStatus::Up
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Up => write!(f, "UP"),
            HealthStatus::Down => write!(f, "DOWN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: HealthStatus,
}

/// A nullary probe for one component.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Key under which the component appears in `components`.
    fn name(&self) -> &str;

    async fn check(&self) -> anyhow::Result<()>;
}

/// Result of running every registered check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub components: BTreeMap<String, ComponentHealth>,
}

/// Fold component statuses: any `DOWN` makes the whole service `DOWN`.
/// An empty set is vacuously `UP`.
pub fn overall_status<'a, I>(components: I) -> HealthStatus
where
    I: IntoIterator<Item = &'a ComponentHealth>,
{
    if components
        .into_iter()
        .any(|component| component.status == HealthStatus::Down)
    {
        HealthStatus::Down
    } else {
        HealthStatus::Up
    }
}

#[derive(Clone, Default)]
pub struct HealthRegistry {
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C>(mut self, check: C) -> Self
    where
        C: HealthCheck + 'static,
    {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in registration order. Checks sharing a name collapse
    /// into one component, which is `DOWN` if any of them is.
    pub async fn check_all(&self) -> HealthReport {
        let mut components: BTreeMap<String, ComponentHealth> = BTreeMap::new();
        for check in &self.checks {
            let status = run_check(check.as_ref()).await;
            components
                .entry(check.name().to_string())
                .and_modify(|component| {
                    if !status.is_up() {
                        component.status = status;
                    }
                })
                .or_insert(ComponentHealth { status });
        }

        HealthReport {
            status: overall_status(components.values()),
            components,
        }
    }
}

async fn run_check(check: &dyn HealthCheck) -> HealthStatus {
    match AssertUnwindSafe(check.check()).catch_unwind().await {
        Ok(Ok(())) => HealthStatus::Up,
        Ok(Err(e)) => {
            tracing::warn!(component = check.name(), error = %e, "Health check failed");
            HealthStatus::Down
        }
        Err(_) => {
            tracing::error!(component = check.name(), "Health check panicked");
            HealthStatus::Down
        }
    }
}
