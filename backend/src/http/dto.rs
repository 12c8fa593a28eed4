//! Data Transfer Objects for the HTTP API.
//!
//! Score records are served as-is (`{score, date, name}`); only the query
//! string and the health payload need their own types.

use serde::{Deserialize, Serialize};

pub use crate::models::ScoreRecord;

/// Query parameters for `GET /scores`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoresQuery {
    /// Number of entries to return (default and cap come from configuration)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}
