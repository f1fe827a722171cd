//! Lazy insert-if-absent for standard maps.
//!
//! [`LazyEmplace::emplace_lazy`] inserts into a map only when the key is
//! absent, computing the value from a factory closure invoked at most once
//! and only on the insert path. The present-key path never evaluates the
//! factory, so expensive constructions are skipped entirely on lookup hits.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Maps supporting insert-if-absent with a deferred value factory.
pub trait LazyEmplace<K, V> {
    /// Insert `factory()` under `key` if the key is absent.
    ///
    /// Returns the entry's value and `true` when an insertion happened. An
    /// existing entry is returned unchanged and the factory is never
    /// invoked.
    fn emplace_lazy<F>(&mut self, key: K, factory: F) -> (&mut V, bool)
    where
        F: FnOnce() -> V;

    /// Fallible variant of [`emplace_lazy`](LazyEmplace::emplace_lazy).
    ///
    /// # Errors
    ///
    /// Propagates the factory's error untransformed; the map is left
    /// without the new entry.
    fn try_emplace_lazy<F, E>(&mut self, key: K, factory: F) -> Result<(&mut V, bool), E>
    where
        F: FnOnce() -> Result<V, E>;
}

impl<K: Eq + Hash, V, S: BuildHasher> LazyEmplace<K, V> for HashMap<K, V, S> {
    fn emplace_lazy<F>(&mut self, key: K, factory: F) -> (&mut V, bool)
    where
        F: FnOnce() -> V,
    {
        match self.entry(key) {
            hash_map::Entry::Occupied(entry) => (entry.into_mut(), false),
            hash_map::Entry::Vacant(entry) => (entry.insert(factory()), true),
        }
    }

    fn try_emplace_lazy<F, E>(&mut self, key: K, factory: F) -> Result<(&mut V, bool), E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entry(key) {
            hash_map::Entry::Occupied(entry) => Ok((entry.into_mut(), false)),
            hash_map::Entry::Vacant(entry) => Ok((entry.insert(factory()?), true)),
        }
    }
}

impl<K: Ord, V> LazyEmplace<K, V> for BTreeMap<K, V> {
    fn emplace_lazy<F>(&mut self, key: K, factory: F) -> (&mut V, bool)
    where
        F: FnOnce() -> V,
    {
        match self.entry(key) {
            btree_map::Entry::Occupied(entry) => (entry.into_mut(), false),
            btree_map::Entry::Vacant(entry) => (entry.insert(factory()), true),
        }
    }

    fn try_emplace_lazy<F, E>(&mut self, key: K, factory: F) -> Result<(&mut V, bool), E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entry(key) {
            btree_map::Entry::Occupied(entry) => Ok((entry.into_mut(), false)),
            btree_map::Entry::Vacant(entry) => Ok((entry.insert(factory()?), true)),
        }
    }
}
