//! HTTP handlers for the REST API.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri},
    Json,
};
use log::warn;

use super::dto::{HealthResponse, ScoreRecord, ScoresQuery};
use super::error::AppError;
use super::state::AppState;
use crate::validation::parse_submission;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the service is up and the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.leaderboard.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Scores
// =============================================================================

/// GET /scores
///
/// Top scores, highest first.
pub async fn list_scores(
    State(state): State<AppState>,
    Query(query): Query<ScoresQuery>,
) -> HandlerResult<Vec<ScoreRecord>> {
    let limit = state.limits.resolve(query.limit);
    let records = state.leaderboard.query_top(limit).await?;
    Ok(Json(records))
}

/// POST /scores
///
/// The body is parsed by hand so that every malformed body, including invalid
/// JSON, is answered with the same `400 Bad Request`.
pub async fn submit_score(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let submission = parse_submission(&body).map_err(|e| {
        warn!("rejected submission: {}", e);
        AppError::from(e)
    })?;

    state.leaderboard.submit(&submission).await?;
    Ok(StatusCode::OK)
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
