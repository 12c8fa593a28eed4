//! Application state for the HTTP server.

use crate::services::{Leaderboard, QueryLimits};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Leaderboard adapter, constructed once at startup
    pub leaderboard: Leaderboard,
    /// Limits applied to `GET /scores?limit=`
    pub limits: QueryLimits,
}

impl AppState {
    pub fn new(leaderboard: Leaderboard, limits: QueryLimits) -> Self {
        Self {
            leaderboard,
            limits,
        }
    }
}
