use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_APP_NAME: &str = "WMS Notification Service";

/// Built from the environment by [`NotificationConfig::load`].
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub common: core_config::Config,
    pub app_name: String,
    pub debug: bool,
    /// Span exporter endpoint; local JSON logging only when unset.
    pub otlp_endpoint: Option<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            app_name: DEFAULT_APP_NAME.to_string(),
            debug: false,
            otlp_endpoint: None,
        }
    }
}

impl NotificationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(NotificationConfig {
            common: common_config,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            debug: parse_flag(env::var("DEBUG").ok().as_deref()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => matches!(v.as_str(), "1" | "true" | "yes" | "on"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = NotificationConfig::default();
        assert_eq!(config.app_name, "WMS Notification Service");
        assert!(!config.debug);
        assert_eq!(config.log_level(), "info");
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn debug_raises_log_level() {
        let config = NotificationConfig {
            debug: true,
            ..NotificationConfig::default()
        };
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn load_reads_service_settings_from_environment() {
        env::set_var("APP_NAME", "Stock Alerts");
        env::set_var("DEBUG", "true");
        env::set_var("OTLP_ENDPOINT", "http://collector:4317");

        let config = NotificationConfig::load().unwrap();

        env::remove_var("APP_NAME");
        env::remove_var("DEBUG");
        env::remove_var("OTLP_ENDPOINT");

        assert_eq!(config.app_name, "Stock Alerts");
        assert!(config.debug);
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
    }

    #[test]
    fn parses_boolean_flags() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("not-a-bool")));
        assert!(!parse_flag(None));
    }
}
