//! Time-bounded read cache for public listing and statistics views.
//!
//! Values are served from memory until they are older than the configured
//! revalidation interval, then reloaded on the next read. Errors are never
//! cached. A zero interval disables caching entirely.
//!
//! Expired entries are swept on every write and the map never holds more
//! than `capacity` keys, so callers that key on client input stay bounded.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::shared::constants::PUBLIC_CACHE_CAPACITY;

struct CachedEntry<V> {
    value: V,
    fetched_at: Instant,
}

pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CachedEntry<V>>>,
    ttl: Duration,
    capacity: usize,
}

impl<V> std::fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("ttl", &self.ttl)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, PUBLIC_CACHE_CAPACITY)
    }

    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Return the cached value for `key`, or run `load` and cache its result.
    pub async fn get_or_try_load<F, Fut, E>(&self, key: &str, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        self.get_or_try_load_if(key, load, |_| true).await
    }

    /// Like [`get_or_try_load`](Self::get_or_try_load), but a freshly loaded
    /// value is only stored when `keep` accepts it.
    pub async fn get_or_try_load_if<F, Fut, E, K>(
        &self,
        key: &str,
        load: F,
        keep: K,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        K: FnOnce(&V) -> bool,
    {
        if self.ttl.is_zero() {
            return load().await;
        }

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.value.clone());
                }
            }
        }

        // Cache miss or expired
        let value = load().await?;
        if !keep(&value) {
            return Ok(value);
        }

        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < ttl);

        if entries.len() >= self.capacity && !entries.contains_key(key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.fetched_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key.to_string(),
            CachedEntry {
                value: value.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(value)
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
