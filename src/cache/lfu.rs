//! LFU Cache Module
//!
//! Implements the frequency-based eviction policy with O(1) candidate lookup.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use linked_hash_map::LinkedHashMap;

use crate::cache::{Cache, CacheEntry};

/// Keys sharing one access frequency, oldest first.
type Bucket<K> = LinkedHashMap<K, ()>;

// == LFU Cache ==
/// Evicts the least frequently touched entry when a new key would overflow.
///
/// Every key carries a counter that starts at 1 and grows on each `get` hit
/// and each overwriting `put`. Keys are grouped into per-frequency buckets
/// kept in insertion order, and the lowest occupied frequency is tracked
/// incrementally, so the eviction candidate is the front of one bucket.
/// Ties between equally frequent keys go to the one that reached that
/// frequency first.
#[derive(Debug)]
pub struct LfuCache<K: Eq + Hash, V> {
    /// Values with their access frequency
    entries: HashMap<K, CacheEntry<V>>,
    /// Frequency -> keys at that frequency; empty buckets are dropped
    buckets: HashMap<u32, Bucket<K>>,
    /// Tracked minimum frequency, 0 when nothing was ever inserted
    min_frequency: u32,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
}

impl<K: Eq + Hash + Clone, V> LfuCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.get()),
            buckets: HashMap::new(),
            min_frequency: 0,
            capacity,
        }
    }

    // == Inspection ==
    /// Returns the tracked minimum frequency.
    ///
    /// After a `remove` empties the minimum bucket the value is advanced by
    /// one, which can point at a frequency no key holds when counts have
    /// gaps. The next insertion resets it to 1.
    pub fn min_frequency(&self) -> u32 {
        self.min_frequency
    }

    /// Returns the access frequency of `key`, if present.
    pub fn frequency_of(&self, key: &K) -> Option<u32> {
        self.entries.get(key).map(|entry| entry.frequency)
    }

    /// Returns the keys at `frequency`, oldest first.
    pub fn bucket(&self, frequency: u32) -> Vec<&K> {
        self.buckets
            .get(&frequency)
            .map(|bucket| bucket.keys().collect())
            .unwrap_or_default()
    }

    /// Returns every occupied frequency in ascending order.
    pub fn frequencies(&self) -> Vec<u32> {
        let mut frequencies: Vec<u32> = self.buckets.keys().copied().collect();
        frequencies.sort_unstable();
        frequencies
    }

    // == Frequency Bookkeeping ==
    /// Moves `key` up one frequency and advances the minimum if its old
    /// bucket was the minimum and is now empty.
    fn bump(&mut self, key: &K) {
        let Some(entry) = self.entries.get_mut(key) else {
            return;
        };
        let previous = entry.touch();
        let current = entry.frequency;

        let emptied = self.detach(key, previous);
        self.buckets
            .entry(current)
            .or_default()
            .insert(key.clone(), ());

        if previous == self.min_frequency && emptied {
            self.min_frequency = self.min_frequency.saturating_add(1);
        }
    }

    /// Removes `key` from the bucket at `frequency`. Returns true when that
    /// bucket is now empty (and has been dropped).
    fn detach(&mut self, key: &K, frequency: u32) -> bool {
        let Some(bucket) = self.buckets.get_mut(&frequency) else {
            return true;
        };
        bucket.remove(key);
        if bucket.is_empty() {
            self.buckets.remove(&frequency);
            return true;
        }
        false
    }

    /// Picks the key to evict: the oldest member of the minimum bucket.
    ///
    /// When the tracked minimum has drifted onto an unoccupied frequency the
    /// lowest occupied bucket above it is used instead. Every resident key is
    /// at or above the tracked minimum, so that bucket holds the true
    /// least-frequent keys.
    fn eviction_candidate(&self) -> Option<(K, u32)> {
        if let Some((key, _)) = self
            .buckets
            .get(&self.min_frequency)
            .and_then(|bucket| bucket.front())
        {
            return Some((key.clone(), self.min_frequency));
        }

        self.buckets
            .iter()
            .filter(|(frequency, _)| **frequency >= self.min_frequency)
            .min_by_key(|(frequency, _)| **frequency)
            .and_then(|(frequency, bucket)| {
                bucket.front().map(|(key, _)| (key.clone(), *frequency))
            })
    }
}

impl<K, V> Cache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<V> {
        if !self.entries.contains_key(key) {
            return None;
        }

        self.bump(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.entries.contains_key(&key) {
            self.bump(&key);
            let entry = self.entries.get_mut(&key)?;
            entry.value = value;
            return Some(entry.value.clone());
        }

        if self.entries.len() >= self.capacity.get() {
            if let Some((victim, frequency)) = self.eviction_candidate() {
                self.detach(&victim, frequency);
                self.entries.remove(&victim);
            }
        }

        self.buckets.entry(1).or_default().insert(key.clone(), ());
        self.min_frequency = 1;

        let stored = value.clone();
        self.entries.insert(key, CacheEntry::new(value));
        Some(stored)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        let emptied = self.detach(key, entry.frequency);

        // Advances by one only; see `min_frequency`
        if entry.frequency == self.min_frequency && emptied {
            self.min_frequency = self.min_frequency.saturating_add(1);
        }

        Some(entry.value)
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
        self.buckets.clear();
        self.min_frequency = 0;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> LfuCache<u64, String> {
        LfuCache::new(NonZeroUsize::new(3).unwrap())
    }

    /// put(1), put(3), put(2), get(3), put(4), put(5), get(4)
    fn warmed_cache() -> LfuCache<u64, String> {
        let mut lfu = cache();
        lfu.put(1, "One".to_string());
        lfu.put(3, "Three".to_string());
        lfu.put(2, "Two".to_string());
        lfu.get(&3);
        lfu.put(4, "Four".to_string());
        lfu.put(5, "Five".to_string());
        lfu.get(&4);
        lfu
    }

    #[test]
    fn test_lfu_get_returns_value() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());

        assert_eq!(lfu.get(&1), Some("One".to_string()));
        assert_eq!(lfu.frequency_of(&1), Some(2));
    }

    #[test]
    fn test_lfu_get_missing_key() {
        let mut lfu = cache();
        assert_eq!(lfu.get(&1), None);
    }

    #[test]
    fn test_lfu_evicts_oldest_at_min_frequency() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());
        lfu.put(3, "Three".to_string());
        lfu.put(2, "Two".to_string());
        lfu.put(4, "Four".to_string());

        assert_eq!(lfu.get(&1), None);
        assert!(lfu.contains_key(&3));
        assert!(lfu.contains_key(&2));
        assert!(lfu.contains_key(&4));
    }

    #[test]
    fn test_lfu_put_returns_stored_value() {
        let mut lfu = cache();
        assert_eq!(lfu.put(1, "One".to_string()), Some("One".to_string()));
    }

    #[test]
    fn test_lfu_buckets_track_frequencies() {
        let lfu = warmed_cache();

        assert_eq!(lfu.frequencies(), vec![1, 2]);
        assert_eq!(lfu.bucket(1), vec![&5]);
        assert_eq!(lfu.bucket(2), vec![&3, &4]);
        assert_eq!(lfu.min_frequency(), 1);
    }

    #[test]
    fn test_lfu_remove_advances_min_frequency() {
        let mut lfu = warmed_cache();

        lfu.remove(&5);

        assert_eq!(lfu.min_frequency(), 2);
    }

    #[test]
    fn test_lfu_put_after_remove() {
        let mut lfu = warmed_cache();

        lfu.remove(&4);
        lfu.put(6, "Six".to_string());

        assert_eq!(lfu.len(), 3);
        assert_eq!(lfu.get(&3), Some("Three".to_string()));
        assert_eq!(lfu.get(&5), Some("Five".to_string()));
        assert_eq!(lfu.get(&6), Some("Six".to_string()));
    }

    #[test]
    fn test_lfu_overwrite_counts_as_access() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());
        lfu.put(2, "Two".to_string());
        lfu.put(1, "Uno".to_string());
        lfu.put(3, "Three".to_string());
        lfu.put(4, "Four".to_string());

        // 2 was the oldest key left at frequency 1
        assert!(!lfu.contains_key(&2));
        assert_eq!(lfu.frequency_of(&1), Some(2));
        assert_eq!(lfu.get(&1), Some("Uno".to_string()));
    }

    #[test]
    fn test_lfu_insert_resets_min_frequency() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());
        lfu.get(&1);
        lfu.get(&1);
        assert_eq!(lfu.min_frequency(), 3);

        lfu.put(2, "Two".to_string());
        assert_eq!(lfu.min_frequency(), 1);
    }

    #[test]
    fn test_lfu_min_frequency_gap_is_preserved() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());
        lfu.put(2, "Two".to_string());
        lfu.get(&2);
        lfu.get(&2);
        lfu.put(3, "Three".to_string());
        lfu.get(&3);
        lfu.get(&3);
        lfu.get(&3);

        // Only key 1 sits at frequency 1; the next occupied bucket is 3
        lfu.remove(&1);
        assert_eq!(lfu.min_frequency(), 2);
        assert!(lfu.bucket(2).is_empty());
    }

    #[test]
    fn test_lfu_eviction_after_min_frequency_drift() {
        let mut lfu: LfuCache<u64, String> = LfuCache::new(NonZeroUsize::new(2).unwrap());

        lfu.put(1, "One".to_string());
        lfu.put(2, "Two".to_string());
        lfu.get(&2);
        lfu.get(&2);
        lfu.remove(&1);
        assert_eq!(lfu.min_frequency(), 2);
        assert_eq!(lfu.frequencies(), vec![3]);

        lfu.put(3, "Three".to_string());
        assert_eq!(lfu.min_frequency(), 1);

        lfu.put(4, "Four".to_string());

        assert_eq!(lfu.len(), 2);
        assert!(lfu.contains_key(&2));
        assert!(lfu.contains_key(&4));
        assert!(!lfu.contains_key(&3));
    }

    #[test]
    fn test_lfu_remove_returns_value() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());

        assert_eq!(lfu.remove(&1), Some("One".to_string()));
        assert!(lfu.is_empty());
    }

    #[test]
    fn test_lfu_remove_nonexistent_key() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());

        assert_eq!(lfu.remove(&2), None);
        assert_eq!(lfu.len(), 1);
    }

    #[test]
    fn test_lfu_contains_key() {
        let mut lfu = cache();

        lfu.put(1, "One".to_string());

        assert!(lfu.contains_key(&1));
        assert!(!lfu.contains_key(&2));
    }

    #[test]
    fn test_lfu_size_capped_at_capacity() {
        let mut lfu = cache();

        for key in 1..=4 {
            lfu.put(key, key.to_string());
        }

        assert_eq!(lfu.len(), 3);
    }

    #[test]
    fn test_lfu_clear() {
        let mut lfu = warmed_cache();

        lfu.clear();

        assert_eq!(lfu.len(), 0);
        assert_eq!(lfu.min_frequency(), 0);
        assert!(lfu.frequencies().is_empty());
    }

    /// Moves `key` straight to `frequency`, as if it had been read that often.
    fn pin_frequency(lfu: &mut LfuCache<u64, String>, key: u64, frequency: u32) {
        let previous = lfu.frequency_of(&key).unwrap();
        lfu.detach(&key, previous);
        lfu.entries.get_mut(&key).unwrap().frequency = frequency;
        lfu.buckets.entry(frequency).or_default().insert(key, ());
        lfu.min_frequency = frequency;
    }

    #[test]
    fn test_lfu_min_frequency_saturates_on_get() {
        let mut lfu = cache();
        lfu.put(1, "One".to_string());
        pin_frequency(&mut lfu, 1, u32::MAX);

        assert_eq!(lfu.get(&1), Some("One".to_string()));

        assert_eq!(lfu.frequency_of(&1), Some(u32::MAX));
        assert_eq!(lfu.min_frequency(), u32::MAX);
        assert_eq!(lfu.bucket(u32::MAX), vec![&1]);
    }

    #[test]
    fn test_lfu_min_frequency_saturates_on_remove() {
        let mut lfu = cache();
        lfu.put(1, "One".to_string());
        pin_frequency(&mut lfu, 1, u32::MAX);

        assert_eq!(lfu.remove(&1), Some("One".to_string()));

        assert_eq!(lfu.min_frequency(), u32::MAX);
        assert!(lfu.is_empty());
    }
}
