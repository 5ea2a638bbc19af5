//! Response DTOs for the news API
//!
//! Bodies returned by the delete, stats and health endpoints. Entities are
//! serialised directly.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for `DELETE /news/:id` and `DELETE /comments/:id`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: u64,
}

impl DeleteResponse {
    pub fn new(entity: &str, id: u64) -> Self {
        Self {
            message: format!("{} with id {} deleted successfully", entity, id),
            id,
        }
    }
}

/// Cache usage for one namespace.
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for NamespaceStats {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            entries: stats.entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Eviction policy in use, `LRU` or `LFU`
    pub algorithm: String,
    pub news: NamespaceStats,
    pub comments: NamespaceStats,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
