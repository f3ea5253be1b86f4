use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Substituted for raw error detail outside debug mode.
pub const GENERIC_DETAILS: &str = "Internal Server Error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A conversion that reached the gateway and failed. `message` is safe to show;
    /// `details` is already redacted unless the server runs in debug mode.
    #[error("Conversion failed: {message}")]
    Conversion {
        message: &'static str,
        details: String,
    },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {rejection}");
        AppError::InvalidRequest("Invalid request body".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Conversion { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
