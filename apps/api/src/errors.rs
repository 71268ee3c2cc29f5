use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const MISSING_CONFIG_MESSAGE: &str = "Missing Supabase configuration";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success response from a forwarded call; status and body are passed through.
    #[error("Downstream error (status {status}): {message}")]
    Downstream { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ConfigMissing(what) => {
                tracing::error!("Configuration missing: {what}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MISSING_CONFIG_MESSAGE.to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Downstream { status, message } => {
                tracing::warn!("Downstream call failed with {status}: {message}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    message.clone(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
