//! End-to-end lazy emplacement and memoization behavior.

use anyhow::Result;
use perf_memo::{LazyEmplace, MemoCache};
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_emplace_absent_key_inserts_and_invokes_once() {
    let calls = Cell::new(0u32);
    let mut map: HashMap<String, u64> = HashMap::new();

    let (value, inserted) = map.emplace_lazy("build".to_string(), || {
        calls.set(calls.get() + 1);
        1234
    });

    assert!(inserted);
    assert_eq!(*value, 1234);
    assert_eq!(calls.get(), 1);
    assert_eq!(map.get("build"), Some(&1234));
}

#[test]
fn test_emplace_present_key_keeps_value_and_skips_factory() {
    let calls = Cell::new(0u32);
    let mut map: HashMap<String, u64> = HashMap::new();
    map.insert("build".to_string(), 1);

    let (value, inserted) = map.emplace_lazy("build".to_string(), || {
        calls.set(calls.get() + 1);
        2
    });

    assert!(!inserted);
    assert_eq!(*value, 1);
    assert_eq!(calls.get(), 0, "factory must not run for a present key");
    assert_eq!(map.get("build"), Some(&1));
}

#[test]
fn test_emplace_twice_equals_emplace_once() {
    let mut once: HashMap<u32, String> = HashMap::new();
    let mut twice: HashMap<u32, String> = HashMap::new();

    once.emplace_lazy(9, || "value".to_string());

    twice.emplace_lazy(9, || "value".to_string());
    twice.emplace_lazy(9, || "other".to_string());

    assert_eq!(once, twice);
}

#[test]
fn test_failing_factory_leaves_map_without_entry() {
    let mut map: HashMap<u32, u32> = HashMap::new();
    map.insert(1, 10);

    let result = map.try_emplace_lazy(2, || Err::<u32, _>("factory failed"));

    assert_eq!(result.unwrap_err(), "factory failed");
    assert_eq!(map.len(), 1, "failed insert must not grow the map");
    assert!(!map.contains_key(&2));
}

#[test]
fn test_btreemap_gets_the_same_contract() {
    let calls = Cell::new(0u32);
    let mut map: BTreeMap<u32, u32> = BTreeMap::new();

    let (_, inserted) = map.emplace_lazy(5, || {
        calls.set(calls.get() + 1);
        50
    });
    assert!(inserted);

    let (value, inserted) = map.emplace_lazy(5, || {
        calls.set(calls.get() + 1);
        99
    });
    assert!(!inserted);
    assert_eq!(*value, 50);
    assert_eq!(calls.get(), 1);
}

/// Memoized derivation with the cache passed explicitly.
fn derived_len(cache: &mut MemoCache<String, usize>, input: &str) -> usize {
    *cache.get_or_insert_with(input.to_string(), || input.len())
}

#[test]
fn test_memo_cache_counts_hits_and_misses() {
    let mut cache = MemoCache::new();

    assert_eq!(derived_len(&mut cache, "abc"), 3);
    assert_eq!(derived_len(&mut cache, "abc"), 3);
    assert_eq!(derived_len(&mut cache, "defg"), 4);

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.entries, 2);
    assert!((stats.hit_rate() - 100.0 / 3.0).abs() < 0.01);
}

#[test]
fn test_memo_cache_fallible_path() {
    let mut cache: MemoCache<u32, u32> = MemoCache::new();

    assert!(cache
        .try_get_or_insert_with(1, || Err::<u32, _>("unavailable"))
        .is_err());
    assert!(cache.is_empty());

    let value = cache.try_get_or_insert_with(1, || Ok::<_, &str>(11)).unwrap();
    assert_eq!(*value, 11);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_stats_export_as_json() -> Result<()> {
    let mut cache: MemoCache<u32, u32> = MemoCache::new();
    cache.get_or_insert_with(1, || 1);
    cache.get_or_insert_with(1, || 1);

    let json = serde_json::to_value(cache.stats())?;
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["entries"], 1);
    Ok(())
}
