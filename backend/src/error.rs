//! Error types surfaced by the leaderboard core.
//!
//! The core knows three failure conditions: a submission that fails
//! validation, a stored key that does not decode, and a store call that
//! fails. Store errors are wrapped without translation so callers can still
//! inspect the underlying [`RepositoryError`].

use crate::db::repository::RepositoryError;

/// Result type for leaderboard operations.
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;

/// Reasons a score submission is rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("Name '{0}' must start with three uppercase letters and contain no '/'")]
    InvalidName(String),
}

/// A stored key that does not split into `score/date/name`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed storage key {key:?}: {reason}")]
pub struct MalformedKey {
    pub key: String,
    pub reason: String,
}

impl MalformedKey {
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Error returned by [`crate::services::Leaderboard`] operations.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Invalid submission: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MalformedKey(#[from] MalformedKey),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] RepositoryError),

    #[error("Failed to encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl LeaderboardError {
    /// Whether the underlying store marked the failure as transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::StoreUnavailable(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl From<RepositoryError> for LeaderboardError {
    fn from(err: RepositoryError) -> Self {
        LeaderboardError::StoreUnavailable(err)
    }
}
