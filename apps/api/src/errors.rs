use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::completion::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnknownRegion(region) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_REGION",
                format!("'{region}' is not a supported region"),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid username or password".to_string(),
            ),
            // Completion failures are surfaced verbatim so the caller can tell
            // "service failed" apart from "service answered with nothing usable".
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (StatusCode::BAD_GATEWAY, "COMPLETION_ERROR", e.to_string())
            }
            AppError::Auth(AuthError::UsernameTaken(username)) => (
                StatusCode::CONFLICT,
                "USERNAME_TAKEN",
                format!("Username '{username}' already exists"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
