//! # Common Types and Traits
use core::{
    fmt::Debug,
    hash::Hash,
};

/// A type that can be used as a word in a phrase.
///
/// Words are opaque: they are only compared, ordered and hashed.
/// Interned ids (``u32``, ``usize``) and ``&'static str`` both qualify.
///
/// Phrases are plain ``&[W]`` slices throughout the crate.
pub trait WordType: 'static + Copy + Eq + Ord + Hash + Debug + Send + Sync {}

impl<T> WordType for T where T: 'static + Copy + Eq + Ord + Hash + Debug + Send + Sync {}

/// Count of n-gram occurrences or clipped matches.
pub type NGramCount = u32;

/// Signed change of an n-gram count or total.
pub type CountDelta = i64;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type BSHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> BSHashMap<K, V> {
            BSHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BSHashMap<K, V> {
            BSHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type BSHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> BSHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BSHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type BSHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> BSHashMap<K, V> {
            BSHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BSHashMap<K, V> {
            BSHashMap::with_capacity(capacity)
        }
    }
}

/// Static check that a type is `Send`.
pub fn static_is_send_check<S: Send>(_: &S) {}

/// Static check that a type is `Sync`.
pub fn static_is_sync_check<S: Sync>(_: &S) {}

/// Check that a type is `Send` and `Sync`.
pub fn static_is_send_sync_check<S: Send + Sync>(v: &S) {
    static_is_send_check(v);
    static_is_sync_check(v);
}
