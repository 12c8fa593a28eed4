//! # Marathon Leaderboard
//!
//! A minimal leaderboard service: it accepts score submissions, validates
//! them, persists them in sorted order and serves the top-N scores.
//!
//! The one real piece of design is the storage key. A `(score, timestamp,
//! name)` tuple becomes a single string `<3-digit score>/<ISO-8601 date>/<name>`
//! whose lexicographic order is the leaderboard order, so a reverse range scan
//! over one partition of any ordered key-value store returns the top scores
//! without a secondary index or an application-side sort.
//!
//! ## Architecture
//!
//! - [`codec`]: pure encode/decode between entries and storage keys
//! - [`validation`]: submission checks run before anything is written
//! - [`services`]: the [`services::Leaderboard`] store adapter (submit, top-N)
//! - [`db`]: the [`db::ScoreStore`] trait with in-memory and Postgres backends
//! - [`config`]: TOML + environment configuration
//! - [`edge`]: CDN edge event handler
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod codec;
pub mod config;
pub mod db;
pub mod edge;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{LeaderboardError, LeaderboardResult, MalformedKey, ValidationError};
pub use models::{ScoreRecord, ScoreSubmission, StorageKey};
pub use services::Leaderboard;
