//! Store implementations.
//!
//! - `local`: In-memory ordered map for unit testing and local development
//! - `postgres`: PostgreSQL table with a composite primary key, via Diesel
pub mod local;
#[cfg(feature = "postgres-repo")]
pub mod postgres;

pub use local::LocalStore;
#[cfg(feature = "postgres-repo")]
pub use postgres::{PostgresConfig, PostgresStore};
