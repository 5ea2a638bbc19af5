//! LRU Cache Module
//!
//! Implements the recency-based eviction policy.

use std::hash::Hash;
use std::num::NonZeroUsize;

use linked_hash_map::LinkedHashMap;

use crate::cache::Cache;

// == LRU Cache ==
/// Evicts the least recently touched entry when a new key would overflow.
///
/// Entries live in a [`LinkedHashMap`] where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Both `get` hits and `put` move the touched key to the back.
#[derive(Debug)]
pub struct LruCache<K: Eq + Hash, V> {
    /// Values in access order
    entries: LinkedHashMap<K, V>,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
}

impl<K: Eq + Hash, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LinkedHashMap::with_capacity(capacity.get()),
            capacity,
        }
    }

    // == Keys ==
    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<V> {
        self.entries.get_refresh(key).map(|value| value.clone())
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.entries.contains_key(&key) {
            // Overwrite loses the old position
            self.entries.remove(&key);
        } else if self.entries.len() >= self.capacity.get() {
            self.entries.pop_front();
        }

        self.entries.insert(key.clone(), value);
        self.entries.get(&key).cloned()
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity.get()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
