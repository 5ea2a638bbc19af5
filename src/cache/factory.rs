//! Cache Factory Module
//!
//! Resolves the configured eviction policy once and builds cache instances.

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::cache::{Cache, LfuCache, LruCache};
use crate::error::ConfigError;

// == Algorithm ==
/// Eviction policy selectable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAlgorithm {
    /// Least recently used
    Lru,
    /// Least frequently used
    Lfu,
}

impl FromStr for CacheAlgorithm {
    type Err = ConfigError;

    /// Accepts exactly `"LRU"` or `"LFU"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LRU" => Ok(Self::Lru),
            "LFU" => Ok(Self::Lfu),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for CacheAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => f.write_str("LRU"),
            Self::Lfu => f.write_str("LFU"),
        }
    }
}

// == Cache Config ==
/// Raw cache settings as read from the environment.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Policy name, `"LRU"` or `"LFU"`
    pub algorithm: String,
    /// Maximum resident entries per cache instance
    pub capacity: NonZeroUsize,
}

// == Cache Factory ==
/// Builds independent cache instances sharing one policy and capacity.
///
/// The policy name is validated in [`CacheFactory::from_config`], so a bad
/// value fails at startup rather than on first use.
#[derive(Debug, Clone, Copy)]
pub struct CacheFactory {
    algorithm: CacheAlgorithm,
    capacity: NonZeroUsize,
}

impl CacheFactory {
    pub fn new(algorithm: CacheAlgorithm, capacity: NonZeroUsize) -> Self {
        Self {
            algorithm,
            capacity,
        }
    }

    /// Parses the configured policy name.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownAlgorithm`] for anything other than
    /// `"LRU"` or `"LFU"`.
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        let algorithm = config.algorithm.parse()?;
        Ok(Self::new(algorithm, config.capacity))
    }

    pub fn algorithm(&self) -> CacheAlgorithm {
        self.algorithm
    }

    /// Builds a fresh, empty cache. Each call returns an independent
    /// instance, one per namespace.
    pub fn create_cache<K, V>(&self) -> Box<dyn Cache<K, V> + Send>
    where
        K: Eq + Hash + Clone + Send + 'static,
        V: Clone + Send + 'static,
    {
        match self.algorithm {
            CacheAlgorithm::Lru => Box::new(LruCache::new(self.capacity)),
            CacheAlgorithm::Lfu => Box::new(LfuCache::new(self.capacity)),
        }
    }
}

/// Validates `config` and builds one cache from it.
pub fn create_cache<K, V>(config: &CacheConfig) -> Result<Box<dyn Cache<K, V> + Send>, ConfigError>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    Ok(CacheFactory::from_config(config)?.create_cache())
}
