use async_trait::async_trait;
use service_core::health::{HealthCheck, HealthRegistry};

/// The process itself. Reaching the probe means it is serving.
pub struct ApplicationCheck;

#[async_trait]
impl HealthCheck for ApplicationCheck {
    fn name(&self) -> &str {
        "application"
    }

    async fn check(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Components reported on readiness and aggregate probes.
pub fn default_registry() -> HealthRegistry {
    HealthRegistry::new().register(ApplicationCheck)
}
