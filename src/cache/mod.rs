//! Cache Module
//!
//! Provides the in-process object cache: a shared [`Cache`] contract with a
//! recency-based and a frequency-based eviction policy, and the factory that
//! picks between them.

mod entry;
mod factory;
mod lfu;
mod lru;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use factory::{create_cache, CacheAlgorithm, CacheConfig, CacheFactory};
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use stats::CacheStats;

// == Cache Contract ==
/// Operations shared by every eviction policy.
///
/// No operation fails on a missing key: absence is reported as `None` or
/// `false`. `get` and `put` may reorder internal eviction metadata even when
/// the key set is unchanged. None of the methods synchronise; callers that
/// share an instance across tasks must wrap it in a lock.
pub trait Cache<K, V> {
    /// Returns the value stored at `key`, recording the access.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Inserts or overwrites `key`, evicting one entry first if a new key
    /// would exceed capacity. Returns the value now stored at `key`.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key`, returning the value it held.
    fn remove(&mut self, key: &K) -> Option<V>;

    fn contains_key(&self, key: &K) -> bool;

    /// Current number of entries, never above [`Cache::capacity`].
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident entries.
    fn capacity(&self) -> usize;

    /// Drops every entry.
    fn clear(&mut self);
}
