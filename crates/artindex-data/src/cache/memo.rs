//! Content-hash keyed memo cache with a fixed time-to-live.

use chrono::{DateTime, TimeDelta, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Default time-to-live: one week.
pub const DEFAULT_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// Default entry cap before the oldest entry is evicted.
pub const DEFAULT_MAX_ENTRIES: usize = 300;

/// Build a cache key from the parts that identify a computation.
///
/// The key is a SHA-256 hex digest over the parts in order, so any change
/// to the data snapshot, grouping column, group list or aggregation mode
/// produces a distinct key.
pub fn content_key<I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_ref());
        // Separator guards against ambiguous concatenations.
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Cache usage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of live entries.
    pub entries: usize,
    /// Lookups that returned a live value.
    pub hits: u64,
    /// Lookups that found nothing, or only an expired value.
    pub misses: u64,
    /// Entries dropped to stay under the entry cap.
    pub evictions: u64,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    cached_at: DateTime<Utc>,
}

/// In-memory memo cache with TTL expiry and a bounded entry count.
///
/// Purely an optimization: callers must produce identical results with
/// the cache disabled.
#[derive(Debug)]
pub struct MemoCache<V> {
    entries: HashMap<String, Entry<V>>,
    ttl: TimeDelta,
    max_entries: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<V: Clone> MemoCache<V> {
    /// Create a cache with the default TTL (one week) and entry cap.
    pub fn new() -> Self {
        Self::with_policy(
            TimeDelta::seconds(DEFAULT_TTL_SECS),
            DEFAULT_MAX_ENTRIES,
        )
    }

    /// Create a cache with an explicit TTL and entry cap.
    pub fn with_policy(ttl: TimeDelta, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Look up a live value, dropping it if it has expired.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = Utc::now();
        let expired = match self.entries.get(key) {
            Some(entry) => now - entry.cached_at > self.ttl,
            None => {
                self.misses += 1;
                return None;
            }
        };
        if expired {
            self.entries.remove(key);
            self.misses += 1;
            return None;
        }
        self.hits += 1;
        self.entries.get(key).map(|e| e.value.clone())
    }

    /// Insert a value, evicting the oldest entry if at capacity.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.cached_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                self.entries.remove(&oldest);
                self.evictions += 1;
            }
        }
        self.entries.insert(
            key,
            Entry {
                value,
                cached_at: Utc::now(),
            },
        );
    }

    /// Return the cached value for `key`, computing and storing it on a
    /// miss. A failed computation is not cached.
    pub fn get_or_compute<E>(
        &mut self,
        key: &str,
        compute: impl FnOnce() -> std::result::Result<V, E>,
    ) -> std::result::Result<V, E> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = compute()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current usage counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}

impl<V: Clone> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
