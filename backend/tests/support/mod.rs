#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use leaderboard::db::LocalStore;
use leaderboard::Leaderboard;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Leaderboard over a fresh in-memory store, plus a handle on that store.
pub fn local_leaderboard() -> (LocalStore, Leaderboard) {
    let store = LocalStore::new();
    let leaderboard = Leaderboard::with_default_partition(Arc::new(store.clone()));
    (store, leaderboard)
}

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (including on panic) and serializes
/// access to the process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs: `Some(v)` sets the variable,
/// `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
