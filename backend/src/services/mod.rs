//! Leaderboard business logic.

pub mod leaderboard;

pub use leaderboard::{Leaderboard, QueryLimits, DEFAULT_PARTITION_KEY, DEFAULT_TOP_LIMIT};
