//! Memoization cache with hit/miss accounting.
//!
//! [`MemoCache`] wraps a `HashMap` behind a get-or-insert-with interface
//! and counts lookup hits and misses. Pass the cache explicitly rather than
//! hiding it in global state, so call sites stay composable and testable.

use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// Owned memoization cache over a hash map.
///
/// Stores every value it computes and never evicts; intended for memoizing
/// expensive derivations keyed by small inputs.
///
/// # Example
///
/// ```
/// use perf_memo::MemoCache;
///
/// let mut cache: MemoCache<u64, u64> = MemoCache::new();
///
/// let squared = *cache.get_or_insert_with(12, || 12 * 12);
/// assert_eq!(squared, 144);
///
/// // Second lookup is a hit; the closure is not invoked.
/// let squared = *cache.get_or_insert_with(12, || unreachable!());
/// assert_eq!(squared, 144);
///
/// let stats = cache.stats();
/// assert_eq!((stats.hits, stats.misses), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    /// Stored entries.
    entries: HashMap<K, V>,
    /// Lookups that found a stored value.
    hits: u64,
    /// Lookups that had to compute a value.
    misses: u64,
}

impl<K: Eq + Hash, V> MemoCache<K, V> {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Create an empty cache with at least `capacity` preallocated slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `key`, computing and inserting the value on a miss.
    ///
    /// The factory runs at most once and only when the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, factory: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                trace!(misses = self.misses, "memo cache miss, computing value");
                entry.insert(factory())
            }
        }
    }

    /// Fallible variant of [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// # Errors
    ///
    /// Propagates the factory's error; the cache is left without the entry.
    /// The miss is still counted.
    pub fn try_get_or_insert_with<F, E>(&mut self, key: K, factory: F) -> Result<&mut V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                Ok(entry.insert(factory()?))
            }
        }
    }

    /// Get a stored value without touching hit/miss counters.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// True if `key` has a stored value.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and reset counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Reset hit/miss counters, keeping entries.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Get a snapshot of current statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl<K: Eq + Hash, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of cache statistics for reporting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheStats {
    /// Lookups that found a stored value.
    pub hits: u64,
    /// Lookups that had to compute a value.
    pub misses: u64,
    /// Number of stored entries.
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate as a percentage (0-100); zero when no lookups happened.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            (self.hits as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }
}
