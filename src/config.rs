//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::num::NonZeroUsize;

use crate::cache::CacheConfig;

const DEFAULT_ALGORITHM: &str = "LRU";
const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};
const DEFAULT_PORT: u16 = 3000;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Eviction policy and per-namespace capacity
    pub cache: CacheConfig,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ALGORITHM` - `LRU` or `LFU` (default: LRU). Validated when
    ///   the caches are built, not here.
    /// - `CACHE_CAPACITY` - Entries per namespace (default: 100; zero or
    ///   non-numeric values fall back to the default)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cache: CacheConfig {
                algorithm: env::var("CACHE_ALGORITHM")
                    .unwrap_or_else(|_| DEFAULT_ALGORITHM.to_string()),
                capacity: env::var("CACHE_CAPACITY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_CAPACITY),
            },
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig {
                algorithm: DEFAULT_ALGORITHM.to_string(),
                capacity: DEFAULT_CAPACITY,
            },
            server_port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache.algorithm, "LRU");
        assert_eq!(config.cache.capacity.get(), 100);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("CACHE_ALGORITHM");
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.cache.algorithm, "LRU");
        assert_eq!(config.cache.capacity.get(), 100);
        assert_eq!(config.server_port, 3000);

        env::set_var("CACHE_ALGORITHM", "LFU");
        env::set_var("CACHE_CAPACITY", "0");
        let config = Config::from_env();
        assert_eq!(config.cache.algorithm, "LFU");
        assert_eq!(config.cache.capacity.get(), 100);

        env::set_var("CACHE_CAPACITY", "8");
        assert_eq!(Config::from_env().cache.capacity.get(), 8);

        env::remove_var("CACHE_ALGORITHM");
        env::remove_var("CACHE_CAPACITY");
    }
}
