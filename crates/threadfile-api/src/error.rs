//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Every error renders as
//! `{"success": false, "error": ...}` with the status and log level chosen by
//! [`ErrorMetadata`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use threadfile_core::{AppError, Config, ErrorMetadata, LogLevel};
use threadfile_processing::ValidationError;

use crate::constants::THREAD_ID_REQUIRED;
use crate::services::IngestError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: both IntoResponse and AppError are foreign to this crate)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();
        match err {
            ValidationError::FileTooLarge { .. } => HttpAppError(AppError::PayloadTooLarge(message)),
            ValidationError::NoFile | ValidationError::UnsupportedType { .. } => {
                HttpAppError(AppError::InvalidInput(message))
            }
        }
    }
}

impl From<IngestError> for HttpAppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::MissingConversationId => {
                HttpAppError(AppError::InvalidInput(THREAD_ID_REQUIRED.to_string()))
            }
            IngestError::ValidationFailed { reason } => reason.into(),
            IngestError::DecodeFailed { reason } => {
                HttpAppError(AppError::DocumentDecode(reason.to_string()))
            }
            IngestError::Store(e) => HttpAppError(AppError::Storage(e.to_string())),
        }
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error.detailed_message(),
                error_type = error_type,
                "Error occurred"
            );
        }
    }
}

static HIDE_ERROR_DETAILS: AtomicBool = AtomicBool::new(false);

/// Apply the configured environment to error rendering. Production hides
/// `details` on every error.
pub fn configure_error_details(config: &Config) {
    HIDE_ERROR_DETAILS.store(config.is_production(), Ordering::Relaxed);
}

fn hide_details() -> bool {
    HIDE_ERROR_DETAILS.load(Ordering::Relaxed)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Internal details only leave the process outside production, and never for sensitive errors.
        let details = if hide_details() || app_error.is_sensitive() {
            None
        } else {
            Some(app_error.detailed_message())
        };

        let body = Json(ErrorResponse {
            success: false,
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
            details,
            suggested_action: app_error.suggested_action().map(String::from),
        });

        (status, body).into_response()
    }
}
