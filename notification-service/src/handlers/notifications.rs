use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;

use crate::models::{NotificationRequest, NotificationResponse};
use crate::services::{record_notification, SendError};
use crate::startup::AppState;
use service_core::error::AppError;

/// `POST /api/v1/notifications`
///
/// Schema violations come back as client errors through [`AppError`]. A failed
/// send is answered with 500 and the error-shaped [`NotificationResponse`].
#[tracing::instrument(skip_all)]
pub async fn create_notification(
    State(state): State<AppState>,
    payload: Result<Json<NotificationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NotificationResponse>), AppError> {
    let Json(notification) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected notification request");
        AppError::from(rejection)
    })?;

    tracing::info!(
        alert_level = %notification.level,
        category = %notification.category,
        title = %notification.title,
        alert_message = %notification.message,
        "Received notification"
    );

    let outcome = AssertUnwindSafe(state.notifier.send(&notification))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| {
            Err(SendError::Internal(
                "Unexpected error while sending notification".to_string(),
            ))
        });

    match outcome {
        Ok(()) => {
            record_notification("success");
            Ok((StatusCode::OK, Json(NotificationResponse::success())))
        }
        Err(e) => {
            let error_msg = e.to_string();
            tracing::error!(
                title = %notification.title,
                error = %error_msg,
                "Failed to process notification"
            );
            record_notification("error");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(NotificationResponse::error(error_msg)),
            ))
        }
    }
}
