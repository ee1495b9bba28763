//! In-memory coordinate cache. Case-insensitive keys, process lifetime.
//!
//! Keys are always the lowercased form of the query. Entries are added only
//! on successful resolution and are never evicted or expired. The cache is
//! `Clone`; clones share the same underlying map, so one cache instance can
//! back concurrent callers.

use super::types::Coordinate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared map from normalized city name to its resolved coordinate.
#[derive(Clone, Default)]
pub struct CoordCache {
    entries: Arc<RwLock<HashMap<String, Coordinate>>>,
}

impl CoordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a city. Returns `None` on miss.
    pub async fn get(&self, query: &str) -> Option<Coordinate> {
        let key = query.to_lowercase();
        self.entries.read().await.get(&key).copied()
    }

    /// Store a coordinate under the lowercased key. A re-insert for the same
    /// key overwrites (last write wins).
    pub async fn insert(&self, query: &str, coord: Coordinate) {
        let key = query.to_lowercase();
        self.entries.write().await.insert(key, coord);
    }

    /// Number of entries (for testing).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
