//! Store factory for dependency injection.
//!
//! Creates the configured [`ScoreStore`] once at startup; the result is shared
//! by every request handler through an `Arc`.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalStore;
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresStore;
use super::repository::{RepositoryError, RepositoryResult, ScoreStore};
use super::PostgresConfig;
use crate::config::ServiceConfig;

/// Store backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// Postgres + Diesel implementation
    Postgres,
    /// In-memory local store
    Local,
}

impl FromStr for StoreType {
    type Err = String;

    /// Parse a store type ("postgres" / "pg" / "local"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

/// Store factory for creating store instances.
///
/// # Example
/// ```ignore
/// use leaderboard::db::{StoreFactory, StoreType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = StoreFactory::create(StoreType::Local, None).await?;
///     assert!(store.health_check().await?);
///     Ok(())
/// }
/// ```
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store instance based on type.
    ///
    /// `postgres_config` is required for [`StoreType::Postgres`].
    pub async fn create(
        store_type: StoreType,
        postgres_config: Option<&PostgresConfig>,
    ) -> RepositoryResult<Arc<dyn ScoreStore>> {
        match store_type {
            StoreType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let config = postgres_config.ok_or_else(|| {
                        RepositoryError::configuration("Postgres store requires PostgresConfig")
                    })?;
                    let pg = Self::create_postgres(config).await?;
                    Ok(pg as Arc<dyn ScoreStore>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    let _ = postgres_config;
                    Err(RepositoryError::configuration(
                        "Postgres store feature not enabled",
                    ))
                }
            }
            StoreType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a Postgres store. Pool creation and migrations block, so they
    /// run on the blocking thread pool.
    #[cfg(feature = "postgres-repo")]
    pub async fn create_postgres(config: &PostgresConfig) -> RepositoryResult<Arc<PostgresStore>> {
        let config = config.clone();
        let store = tokio::task::spawn_blocking(move || PostgresStore::new(config))
            .await
            .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))??;
        Ok(Arc::new(store))
    }

    /// Create an in-memory local store.
    pub fn create_local() -> Arc<dyn ScoreStore> {
        Arc::new(LocalStore::new())
    }

    /// Create a store from a loaded [`ServiceConfig`].
    pub async fn from_service_config(
        config: &ServiceConfig,
    ) -> RepositoryResult<Arc<dyn ScoreStore>> {
        let store_type = config.store_type()?;
        let pg_config = config.to_postgres_config()?;
        Self::create(store_type, pg_config.as_ref()).await
    }
}
