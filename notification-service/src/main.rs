use notification_service::config::NotificationConfig;
use notification_service::services::init_metrics;
use notification_service::startup::Application;
use notification_service::SERVICE_NAME;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = NotificationConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(SERVICE_NAME, config.log_level(), config.otlp_endpoint.as_deref());

    init_metrics().map_err(|e| {
        tracing::error!("Failed to initialize metrics: {}", e);
        std::io::Error::other(format!("Metrics error: {}", e))
    })?;

    tracing::info!(
        app_name = %config.app_name,
        debug = config.debug,
        "Starting {}",
        SERVICE_NAME
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
