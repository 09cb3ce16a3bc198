pub mod health;
pub mod notification;

pub use health::HealthResponse;
pub use notification::{NotificationRequest, NotificationResponse, ResponseStatus};
