use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::models::NotificationRequest;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Simulated failure for testing")]
    Simulated,

    #[error("{0}")]
    Internal(String),
}

/// Whether the mocked send succeeds. Fixed per server instance at build time;
/// production wiring always uses [`SendBehavior::Succeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendBehavior {
    #[default]
    Succeed,
    Fail,
}

/// Shared handle on one notifier's send behavior.
///
/// Only test builds and the `provider-states` feature can change it after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct SendSwitch {
    fail: Arc<AtomicBool>,
}

impl SendSwitch {
    pub fn new(behavior: SendBehavior) -> Self {
        Self {
            fail: Arc::new(AtomicBool::new(behavior == SendBehavior::Fail)),
        }
    }

    pub fn behavior(&self) -> SendBehavior {
        if self.fail.load(Ordering::SeqCst) {
            SendBehavior::Fail
        } else {
            SendBehavior::Succeed
        }
    }

    #[cfg(any(test, feature = "provider-states"))]
    pub fn set(&self, behavior: SendBehavior) {
        self.fail
            .store(behavior == SendBehavior::Fail, Ordering::SeqCst);
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &NotificationRequest) -> Result<(), SendError>;
}

/// Delivers by logging. No channel integration exists behind it.
#[derive(Debug, Default)]
pub struct LogNotifier {
    switch: SendSwitch,
    send_count: AtomicU64,
}

impl LogNotifier {
    pub fn new(behavior: SendBehavior) -> Self {
        Self {
            switch: SendSwitch::new(behavior),
            send_count: AtomicU64::new(0),
        }
    }

    /// Number of send attempts, successful or not.
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    pub fn switch(&self) -> SendSwitch {
        self.switch.clone()
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &NotificationRequest) -> Result<(), SendError> {
        self.send_count.fetch_add(1, Ordering::SeqCst);

        if self.switch.behavior() == SendBehavior::Fail {
            tracing::info!("Simulating failure due to configured send behavior");
            return Err(SendError::Simulated);
        }

        tracing::debug!(
            category = %notification.category,
            title = %notification.title,
            "[MOCK] Notification would be sent"
        );

        Ok(())
    }
}
