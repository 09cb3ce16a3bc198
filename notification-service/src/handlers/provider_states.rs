//! Provider-state setup for consumer contract verification.
//!
//! Compiled only for tests and the `provider-states` feature.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::services::SendBehavior;
use crate::startup::AppState;

pub const FAILURE_STATE: &str = "Notification service is experiencing a failure";
pub const SUCCESS_STATE: &str = "Notification service is configured for success";

#[derive(Debug, Deserialize)]
pub struct ProviderStateRequest {
    pub state: Option<String>,
    #[serde(default)]
    pub params: Value,
}

/// `POST /_pact/provider_states`
pub async fn setup_provider_state(
    State(state): State<AppState>,
    Json(request): Json<ProviderStateRequest>,
) -> Json<Value> {
    tracing::info!(
        state = ?request.state,
        params = %request.params,
        "Setting up provider state"
    );

    match request.state.as_deref() {
        Some(FAILURE_STATE) => state.send_switch.set(SendBehavior::Fail),
        Some(SUCCESS_STATE) => state.send_switch.set(SendBehavior::Succeed),
        _ => tracing::info!("Unknown provider state, leaving send behavior unchanged"),
    }

    Json(json!({ "status": "success" }))
}
