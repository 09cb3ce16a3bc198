use notification_service::config::NotificationConfig;
use notification_service::services::SendBehavior;
use notification_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(SendBehavior::Succeed).await
    }

    /// Spawn a server whose sends follow `behavior`. Each instance owns its
    /// behavior, so tests can run in parallel.
    pub async fn spawn_with(behavior: SendBehavior) -> Self {
        // Use random port for testing (port 0)
        let config = NotificationConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            app_name: "Notification Test Service".to_string(),
            debug: true,
            otlp_endpoint: None,
        };

        let app = Application::build_with_send_behavior(config, behavior)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling the liveness probe
        let client = reqwest::Client::new();
        let liveness_url = format!("{}/health/liveness", address);
        for _ in 0..50 {
            if client.get(&liveness_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    pub async fn post_notification(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/v1/notifications", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn low_stock_alert() -> serde_json::Value {
    serde_json::json!({
        "level": "Warning",
        "category": "stock alerts",
        "title": "Low stock alert for product 1",
        "message": "Stock level is 15. Consider restocking."
    })
}
