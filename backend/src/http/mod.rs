//! HTTP server module for the leaderboard.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Body parsing and submission validation                 │
//! │  - JSON serialization, error mapping                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Leaderboard (services/leaderboard.rs)                    │
//! │  - Key codec, top-N query                                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  ScoreStore (db/)                                         │
//! │  - LocalStore / PostgresStore                             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
