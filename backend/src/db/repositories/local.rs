//! In-memory local store implementation.
//!
//! Items live in a `BTreeMap` of partitions, each holding a `BTreeSet` of sort
//! keys. `String` ordering is byte-wise, which matches the ordering a real
//! key-value store applies to string sort keys.

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::StorageKey;

/// In-memory ordered store.
///
/// Cloning is cheap and clones share the same data, so tests can keep a handle
/// to inspect or break the store after handing it to a [`crate::services::Leaderboard`].
///
/// # Example
/// ```
/// use leaderboard::db::repositories::LocalStore;
/// use leaderboard::db::repository::{ScanOptions, ScoreStore};
///
/// # tokio_test_block(async {
/// let store = LocalStore::new();
/// store.insert_raw(1, "042/2023-11-14T22:13:20/AAA");
/// let keys = store.query_sort_keys(1, ScanOptions::top(10)).await.unwrap();
/// assert_eq!(keys.len(), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalStore {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    partitions: BTreeMap<PartitionKey, BTreeSet<String>>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            partitions: BTreeMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Insert a raw sort key, bypassing the codec.
    ///
    /// Used to seed data and to simulate foreign or corrupted writes.
    pub fn insert_raw(&self, partition: PartitionKey, sort_key: impl Into<String>) {
        self.data
            .write()
            .partitions
            .entry(partition)
            .or_default()
            .insert(sort_key.into());
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the store.
    pub fn clear(&self) {
        self.data.write().partitions.clear();
    }

    /// Number of items stored in a partition.
    pub fn item_count(&self, partition: PartitionKey) -> usize {
        self.data
            .read()
            .partitions
            .get(&partition)
            .map_or(0, BTreeSet::len)
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Store is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreStore for LocalStore {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn put_item(
        &self,
        partition: PartitionKey,
        sort_key: &StorageKey,
    ) -> RepositoryResult<()> {
        self.check_health("put_item")?;
        self.insert_raw(partition, sort_key.as_str());
        Ok(())
    }

    async fn query_sort_keys(
        &self,
        partition: PartitionKey,
        options: ScanOptions,
    ) -> RepositoryResult<Vec<String>> {
        self.check_health("query_sort_keys")?;

        let data = self.data.read();
        let Some(keys) = data.partitions.get(&partition) else {
            return Ok(Vec::new());
        };

        let items: Vec<String> = if options.descending {
            keys.iter().rev().take(options.limit).cloned().collect()
        } else {
            keys.iter().take(options.limit).cloned().collect()
        };
        debug!(
            "scanned partition={} descending={} returned={}",
            partition,
            options.descending,
            items.len()
        );
        Ok(items)
    }
}
