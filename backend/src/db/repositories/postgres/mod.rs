//! Postgres store implementation using Diesel.
//!
//! Items live in a single `leaderboard_entries` table whose primary key is the
//! composite `(pk, sk)`. The `sk` column uses the "C" collation so that
//! `ORDER BY sk` compares bytes, exactly like the in-memory store.
//!
//! Pool settings come from the `[postgres]` section of `leaderboard.toml`
//! (see `ServiceConfig::to_postgres_config`), defaults being 10 max / 1 min
//! connections, a 30s checkout timeout and a 600s idle timeout.
//!
//! Failed calls are not retried here; the error is returned to the caller
//! with its retryable flag set where the failure is transient.

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::debug;
use std::time::Duration;
use tokio::task;

use crate::db::repository::{
    ErrorContext, PartitionKey, RepositoryError, RepositoryResult, ScanOptions, ScoreStore,
};
use crate::models::StorageKey;

mod models;
mod schema;

use models::NewEntryRow;
use schema::leaderboard_entries;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

/// Diesel-backed store for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        {
            let mut conn = pool
                .get()
                .map_err(|e| RepositoryError::from(e).with_operation("run_migrations"))?;
            Self::run_migrations(&mut conn)?;
        }

        Ok(Self { pool })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;

        Ok(())
    }

    /// Run a blocking Diesel operation on a pooled connection.
    ///
    /// Executes exactly once; a pool checkout that times out comes back as a
    /// retryable `Unreachable` error.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| RepositoryError::from(e).with_operation(operation))?;
            f(&mut conn).map_err(|e| e.with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

#[async_trait]
impl ScoreStore for PostgresStore {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn put_item(
        &self,
        partition: PartitionKey,
        sort_key: &StorageKey,
    ) -> RepositoryResult<()> {
        let row = NewEntryRow {
            pk: partition,
            sk: sort_key.as_str().to_string(),
        };
        self.with_conn("put_item", move |conn| {
            // An existing row with the same key is identical, so keeping it is an overwrite.
            diesel::insert_into(leaderboard_entries::table)
                .values(&row)
                .on_conflict_do_nothing()
                .execute(conn)
                .map(|_| ())
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn query_sort_keys(
        &self,
        partition: PartitionKey,
        options: ScanOptions,
    ) -> RepositoryResult<Vec<String>> {
        let limit = i64::try_from(options.limit).unwrap_or(i64::MAX);
        let keys = self
            .with_conn("query_sort_keys", move |conn| {
                let query = leaderboard_entries::table
                    .filter(leaderboard_entries::pk.eq(partition))
                    .select(leaderboard_entries::sk)
                    .limit(limit)
                    .into_boxed();
                let query = if options.descending {
                    query.order(leaderboard_entries::sk.desc())
                } else {
                    query.order(leaderboard_entries::sk.asc())
                };
                query.load::<String>(conn).map_err(RepositoryError::from)
            })
            .await?;
        debug!(
            "scanned partition={} descending={} returned={}",
            partition,
            options.descending,
            keys.len()
        );
        Ok(keys)
    }
}
