//! Store trait definitions.
//!
//! - [`error`]: Error types for store operations
//! - [`store`]: The [`ScoreStore`] trait and scan options
//!
//! The leaderboard only needs two primitives from its store: point writes of
//! `(partition, sort key)` pairs and reverse, limited range scans inside one
//! partition. Anything offering those (an in-memory ordered map, a SQL table
//! with a composite primary key, a managed key-value table) can back it.

pub mod error;
pub mod store;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use store::{PartitionKey, ScanOptions, ScoreStore};
