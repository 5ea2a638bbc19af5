//! Cache Entry Module
//!
//! Defines the per-slot unit stored by the frequency-based cache.

// == Cache Entry ==
/// A cached value together with its access frequency.
///
/// The recency cache keeps no per-entry metadata beyond its position in the
/// ordered map, so it stores values directly. The frequency cache stores
/// one of these per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Number of accesses since insertion, starting at 1
    pub frequency: u32,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a freshly inserted entry with frequency 1.
    pub fn new(value: V) -> Self {
        Self {
            value,
            frequency: 1,
        }
    }

    // == Touch ==
    /// Records one access and returns the frequency held before it.
    pub fn touch(&mut self) -> u32 {
        let previous = self.frequency;
        self.frequency = previous.saturating_add(1);
        previous
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_at_frequency_one() {
        let entry = CacheEntry::new("value");

        assert_eq!(entry.value, "value");
        assert_eq!(entry.frequency, 1);
    }

    #[test]
    fn test_touch_returns_previous_frequency() {
        let mut entry = CacheEntry::new(42);

        assert_eq!(entry.touch(), 1);
        assert_eq!(entry.touch(), 2);
        assert_eq!(entry.frequency, 3);
    }
}
