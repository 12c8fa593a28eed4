//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{LeaderboardError, ValidationError};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Leaderboard core error
    Leaderboard(LeaderboardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Leaderboard(LeaderboardError::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", e.to_string()),
            ),
            AppError::Leaderboard(LeaderboardError::MalformedKey(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("MALFORMED_KEY", "Leaderboard data is corrupted")
                    .with_details(e.to_string()),
            ),
            AppError::Leaderboard(LeaderboardError::StoreUnavailable(e)) => {
                let mut error = ApiError::new("STORE_UNAVAILABLE", e.to_string());
                if e.is_retryable() {
                    error = error.with_details("retryable");
                }
                (StatusCode::SERVICE_UNAVAILABLE, error)
            }
            AppError::Leaderboard(LeaderboardError::Encoding(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("ENCODING_FAILED", e.to_string()),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<LeaderboardError> for AppError {
    fn from(err: LeaderboardError) -> Self {
        AppError::Leaderboard(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
