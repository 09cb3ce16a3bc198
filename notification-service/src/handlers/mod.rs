pub mod health;
pub mod notifications;
#[cfg(any(test, feature = "provider-states"))]
pub mod provider_states;

pub use health::{
    health_check, liveness_check, metrics_endpoint, readiness_check, startup_check,
};
pub use notifications::create_notification;
