//! Router configuration for the HTTP API.

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Submissions are three small fields; anything bigger is not a submission.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Browser games post scores from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/scores",
            get(handlers::list_scores).post(handlers::submit_score),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalStore;
    use crate::services::{Leaderboard, QueryLimits};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let leaderboard = Leaderboard::with_default_partition(Arc::new(LocalStore::new()));
        let state = AppState::new(leaderboard, QueryLimits::default());
        let _router = create_router(state);
    }
}
