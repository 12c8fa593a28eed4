//! The ordered key-value store contract consumed by the leaderboard.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::StorageKey;

/// Partition ("hash") key grouping the items of one leaderboard.
pub type PartitionKey = i64;

/// Options for a range scan within one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Read in reverse lexicographic sort-key order
    pub descending: bool,
    /// Maximum number of items returned
    pub limit: usize,
}

impl ScanOptions {
    /// Highest sort keys first, at most `limit` of them.
    pub fn top(limit: usize) -> Self {
        Self {
            descending: true,
            limit,
        }
    }
}

/// An ordered key-value store with composite `(partition, sort key)` items.
///
/// Sort keys are compared byte-wise. Implementations must be `Send + Sync` so a
/// single instance can be shared across request handlers.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Check if the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Write a single item. Writing a key that already exists is not an error;
    /// the item is simply replaced by an identical one.
    async fn put_item(&self, partition: PartitionKey, sort_key: &StorageKey)
        -> RepositoryResult<()>;

    /// Range scan over one partition, projecting only the sort key.
    ///
    /// Keys are returned raw: the store does not know the key format and may
    /// hold items written by other tools.
    async fn query_sort_keys(
        &self,
        partition: PartitionKey,
        options: ScanOptions,
    ) -> RepositoryResult<Vec<String>>;
}
