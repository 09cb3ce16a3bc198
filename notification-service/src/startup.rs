//! Application startup and lifecycle management.
//!
//! Builds the HTTP router (notification endpoint, probes, metrics), binds the
//! listener and serves until a shutdown signal arrives.

use crate::config::NotificationConfig;
use crate::handlers;
use crate::services::{default_registry, LogNotifier, Notifier, SendBehavior};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::health::HealthRegistry;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

#[cfg(any(test, feature = "provider-states"))]
use crate::services::SendSwitch;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: NotificationConfig,
    pub notifier: Arc<dyn Notifier>,
    pub health: HealthRegistry,
    #[cfg(any(test, feature = "provider-states"))]
    pub send_switch: SendSwitch,
}

impl AppState {
    /// State backed by a [`LogNotifier`] with the given send behavior.
    pub fn new(config: NotificationConfig, behavior: SendBehavior) -> Self {
        let notifier = LogNotifier::new(behavior);
        #[cfg(any(test, feature = "provider-states"))]
        let send_switch = notifier.switch();

        Self {
            config,
            notifier: Arc::new(notifier),
            health: default_registry(),
            #[cfg(any(test, feature = "provider-states"))]
            send_switch,
        }
    }

    /// Swap in an arbitrary notifier. Provider states keep driving the
    /// previous notifier's switch; use [`AppState::with_log_notifier`] to
    /// keep them wired.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Swap in a [`LogNotifier`], taking over its send switch as well.
    pub fn with_log_notifier(mut self, notifier: Arc<LogNotifier>) -> Self {
        #[cfg(any(test, feature = "provider-states"))]
        {
            self.send_switch = notifier.switch();
        }
        self.notifier = notifier;
        self
    }

    pub fn with_health(mut self, health: HealthRegistry) -> Self {
        self.health = health;
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new().route("/notifications", post(handlers::create_notification));

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/health/liveness", get(handlers::liveness_check))
        .route("/health/readiness", get(handlers::readiness_check))
        .route("/health/startup", get(handlers::startup_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .nest("/api/v1", api);

    // Contract harnesses post to either form; axum does not redirect.
    #[cfg(any(test, feature = "provider-states"))]
    let router = router
        .route(
            "/_pact/provider_states",
            post(handlers::provider_states::setup_provider_state),
        )
        .route(
            "/_pact/provider_states/",
            post(handlers::provider_states::setup_provider_state),
        );

    router
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the production application: every send succeeds.
    pub async fn build(config: NotificationConfig) -> Result<Self, AppError> {
        Self::build_with_send_behavior(config, SendBehavior::Succeed).await
    }

    /// Build with an explicit send behavior, scoped to this instance.
    pub async fn build_with_send_behavior(
        config: NotificationConfig,
        behavior: SendBehavior,
    ) -> Result<Self, AppError> {
        let state = AppState::new(config, behavior);
        Self::build_with_state(state).await
    }

    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = state.config.common.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            app_name = %state.config.app_name,
            "Notification service listening on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
