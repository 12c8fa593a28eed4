//! Storage layer for leaderboard entries.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP edge / CDN event handler                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Leaderboard (services) - key codec + query contract    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ScoreStore trait (repository/) - ordered KV interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────┐     ┌───────────▼─────────────┐
//! │ LocalStore       │     │ PostgresStore           │
//! │ (in-memory)      │     │ (Diesel, feature-gated) │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! Nothing in this module knows the key format; stores move opaque sort keys.

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one store backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use factory::{StoreFactory, StoreType};
pub use repositories::LocalStore;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresStore;
pub use repository::{
    ErrorContext, PartitionKey, RepositoryError, RepositoryResult, ScanOptions, ScoreStore,
};
