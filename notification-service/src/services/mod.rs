pub mod health;
pub mod metrics;
pub mod notifier;

pub use self::health::{default_registry, ApplicationCheck};
pub use self::metrics::{get_metrics, init_metrics, record_notification};
pub use self::notifier::{LogNotifier, Notifier, SendBehavior, SendError, SendSwitch};
