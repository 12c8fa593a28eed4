//! The leaderboard store adapter.
//!
//! [`Leaderboard`] is the only component that translates between submissions,
//! records and storage keys. It writes one item per submission under a fixed
//! partition and answers "top N" with a single reverse range scan.
//!
//! # Ordering
//!
//! The scan is a plain reverse of the whole key, so entries come back by
//! descending score, then by descending date within a score, then by
//! descending name within the same second. There is no per-field direction.

use log::{info, warn};
use std::sync::Arc;

use crate::codec;
use crate::db::repository::{PartitionKey, ScanOptions, ScoreStore};
use crate::error::{LeaderboardError, LeaderboardResult, ValidationError};
use crate::models::{iso_date_from_unix, ScoreRecord, ScoreSubmission};

/// Partition holding the marathon leaderboard.
pub const DEFAULT_PARTITION_KEY: PartitionKey = 1;

/// Number of entries served when a caller does not ask for a specific count.
pub const DEFAULT_TOP_LIMIT: usize = 100;

/// Limits applied to caller-supplied `limit` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_TOP_LIMIT,
            max_limit: 1000,
        }
    }
}

impl QueryLimits {
    /// Pick the effective limit: the default when none is requested, clamped
    /// to `max_limit`.
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

/// Leaderboard backed by an ordered key-value store.
///
/// Built once at startup and shared; cloning only clones the store handle.
#[derive(Clone)]
pub struct Leaderboard {
    store: Arc<dyn ScoreStore>,
    partition_key: PartitionKey,
}

impl Leaderboard {
    /// Create a leaderboard over the given store partition.
    pub fn new(store: Arc<dyn ScoreStore>, partition_key: PartitionKey) -> Self {
        Self {
            store,
            partition_key,
        }
    }

    /// Create a leaderboard over [`DEFAULT_PARTITION_KEY`].
    pub fn with_default_partition(store: Arc<dyn ScoreStore>) -> Self {
        Self::new(store, DEFAULT_PARTITION_KEY)
    }

    pub fn partition_key(&self) -> PartitionKey {
        self.partition_key
    }

    pub fn store(&self) -> &Arc<dyn ScoreStore> {
        &self.store
    }

    /// Check whether the underlying store is reachable.
    pub async fn health_check(&self) -> LeaderboardResult<bool> {
        self.store
            .health_check()
            .await
            .map_err(LeaderboardError::StoreUnavailable)
    }

    /// Record a validated submission.
    ///
    /// Two submissions with the same score, second and name produce the same
    /// key; the second one silently replaces the first.
    pub async fn submit(&self, submission: &ScoreSubmission) -> LeaderboardResult<()> {
        let date = iso_date_from_unix(submission.time).ok_or_else(|| {
            ValidationError::OutOfRange {
                field: "time",
                value: submission.time.to_string(),
            }
        })?;

        let key = codec::encode(submission.score, &date, &submission.name);
        self.store
            .put_item(self.partition_key, &key)
            .await
            .map_err(LeaderboardError::StoreUnavailable)?;

        info!(
            "added score, name={}, score={}, date={}",
            submission.name, submission.score, date
        );
        Ok(())
    }

    /// Return at most `limit` entries, highest score first.
    ///
    /// A single undecodable key fails the whole query; skipping it would hide
    /// leaderboard corruption.
    pub async fn query_top(&self, limit: usize) -> LeaderboardResult<Vec<ScoreRecord>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let keys = self
            .store
            .query_sort_keys(self.partition_key, ScanOptions::top(limit))
            .await
            .map_err(LeaderboardError::StoreUnavailable)?;

        keys.iter()
            .map(|key| {
                codec::decode(key).map_err(|e| {
                    warn!("partition={} holds malformed key: {}", self.partition_key, e);
                    LeaderboardError::from(e)
                })
            })
            .collect()
    }
}
