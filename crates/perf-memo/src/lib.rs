//! Lazy insert-if-absent map helpers and a memoization cache.
//!
//! This crate avoids redundant computation on map insertion:
//!
//! - **Lazy emplace** ([`emplace`]): insert-if-absent with a deferred value
//!   factory, for `HashMap` and `BTreeMap`
//! - **Memo cache** ([`cache`]): an owned cache wrapper with hit/miss
//!   accounting
//!
//! # Example
//!
//! ```
//! use perf_memo::LazyEmplace;
//! use std::collections::HashMap;
//!
//! let mut cache: HashMap<u32, String> = HashMap::new();
//!
//! let (value, inserted) = cache.emplace_lazy(7, || "expensive".to_string());
//! assert!(inserted);
//! assert_eq!(*value, "expensive");
//!
//! // Present key: the factory is never invoked.
//! let (value, inserted) = cache.emplace_lazy(7, || unreachable!());
//! assert!(!inserted);
//! assert_eq!(*value, "expensive");
//! ```
//!
//! Nothing here takes locks; a caller sharing a map across threads owns the
//! synchronization.

pub mod cache;
pub mod emplace;

pub use cache::{CacheStats, MemoCache};
pub use emplace::LazyEmplace;
