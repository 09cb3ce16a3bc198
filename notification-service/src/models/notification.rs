use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Alert sent successfully";
pub const FAILURE_MESSAGE: &str = "Failed to deliver notification";

/// Inbound alert. Unknown fields are rejected rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotificationRequest {
    /// Free-form severity label, e.g. "Warning".
    pub level: String,
    pub category: String,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStatus::Success => write!(f, "success"),
            ResponseStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of a notification request. `details` is set only on errors;
/// construct through [`NotificationResponse::success`] or
/// [`NotificationResponse::error`] to keep that true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotificationResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl NotificationResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
            details: None,
        }
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: FAILURE_MESSAGE.to_string(),
            details: Some(details.into()),
        }
    }
}
