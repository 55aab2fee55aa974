//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, PutOutcome, SnapshotEntry};

/// Response body for the GET operation (GET /get/:key)
///
/// Both hits and misses are successful responses; `found` tells them
/// apart.
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key, after normalization
    pub key: String,
    /// The stored value, absent on a miss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the key was present
    pub found: bool,
}

impl GetResponse {
    /// Creates a hit response carrying the stored value.
    pub fn hit(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            found: true,
        }
    }

    /// Creates a miss response.
    pub fn miss(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            found: false,
        }
    }
}

/// Response body for the PUT operation (PUT /put)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was stored, after normalization
    pub key: String,
    /// Number of entries after the put
    pub size: usize,
    /// Key evicted to make room, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<String>,
}

impl PutResponse {
    /// Creates a new PutResponse from a put outcome
    pub fn new(key: impl Into<String>, outcome: &PutOutcome) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
            size: outcome.size,
            evicted: outcome.evicted.clone(),
        }
    }
}

/// One rendered cache slot (GET /snapshot)
///
/// Empty slots are rendered explicitly so a display always shows exactly
/// `capacity` slots, occupied or not.
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    /// Slot position, 0 = least recently used
    pub index: usize,
    /// Whether the slot holds an entry
    pub occupied: bool,
    /// The entry's key, absent for empty slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The entry's value, absent for empty slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// True only for the least-recently-used entry
    pub is_lru: bool,
    /// True only for the most-recently-used entry
    pub is_mru: bool,
}

impl SlotResponse {
    /// Creates an occupied slot from a snapshot entry
    pub fn occupied(index: usize, entry: SnapshotEntry) -> Self {
        Self {
            index,
            occupied: true,
            key: Some(entry.key),
            value: Some(entry.value),
            is_lru: entry.is_lru,
            is_mru: entry.is_mru,
        }
    }

    /// Creates an empty slot
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            occupied: false,
            key: None,
            value: None,
            is_lru: false,
            is_mru: false,
        }
    }
}

/// Response body for the snapshot endpoint (GET /snapshot)
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    /// Total number of slots
    pub capacity: usize,
    /// Number of occupied slots
    pub size: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Exactly `capacity` slots, LRU first, empty slots last
    pub slots: Vec<SlotResponse>,
}

impl SnapshotResponse {
    /// Renders the ordered entries into exactly `capacity` slots.
    pub fn new(
        capacity: usize,
        stats: &CacheStats,
        entries: impl Iterator<Item = SnapshotEntry>,
    ) -> Self {
        let mut slots: Vec<SlotResponse> = entries
            .enumerate()
            .map(|(index, entry)| SlotResponse::occupied(index, entry))
            .collect();
        let size = slots.len();
        for index in size..capacity {
            slots.push(SlotResponse::empty(index));
        }

        Self {
            capacity,
            size,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
            slots,
        }
    }
}

/// Response body for the RESET operation (POST /reset)
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    /// Success message
    pub message: String,
    /// Capacity in effect after the reset
    pub capacity: usize,
}

impl ResetResponse {
    /// Creates a new ResetResponse
    pub fn new(capacity: usize) -> Self {
        Self {
            message: format!("Cache reset with capacity {}", capacity),
            capacity,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, size: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            size,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the log endpoint (GET /log)
#[derive(Debug, Clone, Serialize)]
pub struct LogResponse {
    /// Operation descriptions, oldest first
    pub entries: Vec<String>,
}

impl LogResponse {
    /// Creates a new LogResponse
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str, is_lru: bool, is_mru: bool) -> SnapshotEntry {
        SnapshotEntry {
            key: key.to_string(),
            value: value.to_string(),
            is_lru,
            is_mru,
        }
    }

    #[test]
    fn test_get_response_hit_serialize() {
        let resp = GetResponse::hit("test_key", "test_value");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("test_key"));
        assert!(json.contains("test_value"));
        assert!(json.contains("\"found\":true"));
    }

    #[test]
    fn test_get_response_miss_omits_value() {
        let resp = GetResponse::miss("test_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"found\":false"));
        assert!(!json.contains("value"));
    }

    #[test]
    fn test_put_response_serialize() {
        let outcome = crate::cache::PutOutcome {
            size: 2,
            evicted: Some("OLD".to_string()),
        };
        let resp = PutResponse::new("my_key", &outcome);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("successfully"));
        assert!(json.contains("OLD"));
        assert!(json.contains("\"size\":2"));
    }

    #[test]
    fn test_put_response_omits_evicted_when_none() {
        let outcome = crate::cache::PutOutcome {
            size: 1,
            evicted: None,
        };
        let resp = PutResponse::new("my_key", &outcome);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("evicted"));
    }

    #[test]
    fn test_snapshot_response_pads_to_capacity() {
        let stats = CacheStats::new();
        let entries = vec![entry("A", "1", true, false), entry("B", "2", false, true)];
        let resp = SnapshotResponse::new(4, &stats, entries.into_iter());

        assert_eq!(resp.capacity, 4);
        assert_eq!(resp.size, 2);
        assert_eq!(resp.slots.len(), 4);
        assert!(resp.slots[0].occupied);
        assert!(resp.slots[1].occupied);
        assert!(!resp.slots[2].occupied);
        assert!(!resp.slots[3].occupied);
        assert!(resp.slots[0].is_lru);
        assert!(resp.slots[1].is_mru);
        assert!(!resp.slots[2].is_lru && !resp.slots[2].is_mru);
    }

    #[test]
    fn test_snapshot_response_empty_cache() {
        let stats = CacheStats::new();
        let resp = SnapshotResponse::new(3, &stats, std::iter::empty());

        assert_eq!(resp.size, 0);
        assert_eq!(resp.slots.len(), 3);
        assert!(resp.slots.iter().all(|slot| !slot.occupied));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
        };
        let resp = StatsResponse::new(&stats, 7);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.size, 7);
    }

    #[test]
    fn test_stats_response_zero_lookups() {
        let resp = StatsResponse::new(&CacheStats::new(), 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_reset_response_serialize() {
        let resp = ResetResponse::new(3);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"capacity\":3"));
        assert!(json.contains("reset"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
