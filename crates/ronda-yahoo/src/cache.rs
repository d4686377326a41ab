//! In-memory price cache with optional JSON snapshots.
//!
//! Entries are keyed by `(symbol, start, end)` and store the serialized
//! series, so a snapshot on disk and the in-memory map share one format.
//! Concurrent fetches of the same key may race; the last write wins, which
//! is harmless because both writes carry the same payload.

use crate::Result;
use ronda_traits::types::{Date, PriceSeries};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Cache key: one entry per symbol and fetch window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Sanitized instrument symbol.
    pub symbol: String,
    /// Window start (inclusive).
    pub start: Date,
    /// Window end (exclusive).
    pub end: Date,
}

impl CacheKey {
    /// Creates a key for a symbol and fetch window.
    #[must_use]
    pub fn new(symbol: impl Into<String>, start: Date, end: Date) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }
}

/// Shared in-memory cache of fetched price series.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct PriceCache {
    inner: Arc<RwLock<HashMap<CacheKey, String>>>,
}

impl PriceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a series; `None` on a miss or an undeserializable entry.
    pub async fn get(&self, key: &CacheKey) -> Option<PriceSeries> {
        let guard = self.inner.read().await;
        let payload = guard.get(key)?;
        match serde_json::from_str(payload) {
            Ok(series) => Some(series),
            Err(e) => {
                warn!(symbol = %key.symbol, error = %e, "dropping corrupt cache entry");
                None
            }
        }
    }

    /// Stores a series under `key`.
    pub async fn put(&self, key: CacheKey, series: &PriceSeries) {
        match serde_json::to_string(series) {
            Ok(payload) => {
                self.inner.write().await.insert(key, payload);
            }
            Err(e) => warn!(symbol = %key.symbol, error = %e, "failed to serialize series"),
        }
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Removes every entry.
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    /// Writes a JSON snapshot of the cache to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the file write fails.
    pub async fn persist(&self, path: &Path) -> Result<()> {
        let snapshot: Vec<(CacheKey, String)> = {
            let guard = self.inner.read().await;
            guard.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        };
        let json = serde_json::to_string(&snapshot)?;
        tokio::fs::write(path, json).await?;
        debug!(entries = snapshot.len(), path = %path.display(), "cache persisted");
        Ok(())
    }

    /// Loads a JSON snapshot from `path`, replacing the current contents.
    ///
    /// A missing or unparseable snapshot leaves the cache as it was; the
    /// provider then simply refetches.
    pub async fn load(&self, path: &Path) {
        let json = match tokio::fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no cache snapshot loaded");
                return;
            }
        };
        match serde_json::from_str::<Vec<(CacheKey, String)>>(&json) {
            Ok(snapshot) => {
                let mut guard = self.inner.write().await;
                guard.clear();
                guard.extend(snapshot);
                debug!(entries = guard.len(), path = %path.display(), "cache loaded");
            }
            Err(e) => warn!(path = %path.display(), error = %e, "ignoring corrupt cache snapshot"),
        }
    }
}
