//! Error types for the book library

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Remote call failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote service answered {status} to {operation}")]
    RemoteStatus {
        operation: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Book has no identifier")]
    MissingIdentifier,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// True for failures of a call to the remote book service.
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::RemoteStatus { .. })
    }

    /// True for failures a library operation has already turned into a
    /// status message.
    pub fn is_reported(&self) -> bool {
        self.is_remote_failure() || matches!(self, AppError::MissingIdentifier)
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            AppError::Validation(_) | AppError::MissingIdentifier => {
                (StatusCode::BAD_REQUEST, "BadValue")
            }
            AppError::Transport(_) | AppError::RemoteStatus { .. } => {
                tracing::error!("Remote error reached the HTTP layer: {}", self);
                (StatusCode::BAD_GATEWAY, "RemoteFailure")
            }
            AppError::InvalidUrl(_) | AppError::Config(_) => {
                tracing::error!("Internal error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failure")
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
