//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. This layer
//! owns everything the core does not: key normalization, request
//! validation, capacity clamping, and the rolling operation log.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::OpLog;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    normalize_key, GetResponse, HealthResponse, LogResponse, PutRequest, PutResponse,
    ResetRequest, ResetResponse, SnapshotResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The current cache is a field here, never a module-level global; it is
/// wrapped in Arc<RwLock<>> so handlers serialize access to the
/// single-threaded core.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
    /// Rolling log of operation descriptions
    pub log: Arc<RwLock<OpLog>>,
    /// Bounds applied to user-supplied capacities
    pub config: Config,
}

impl AppState {
    /// Creates a new AppState around the given cache store.
    pub fn new(cache: CacheStore, config: Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            log: Arc::new(RwLock::new(OpLog::new(config.log_capacity))),
            config,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The initial capacity passes through the configured clamp, so the
    /// store only ever sees a positive capacity.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = CacheStore::new(config.clamp_capacity(config.capacity))?;
        Ok(Self::new(cache, config.clone()))
    }
}

/// Handler for PUT /put
///
/// Stores a key-value pair, evicting the LRU entry when the cache is
/// full.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let key = normalize_key(&req.key);

    // Acquire write lock and store the value
    let outcome = {
        let mut cache = state.cache.write().await;
        cache.put(key.clone(), req.value)
    };

    let line = match &outcome.evicted {
        Some(victim) => format!("PUT {} -> size {} (evicted {})", key, outcome.size, victim),
        None => format!("PUT {} -> size {}", key, outcome.size),
    };
    state.log.write().await.push(line);

    Ok(Json(PutResponse::new(key, &outcome)))
}

/// Handler for GET /get/:key
///
/// Looks up a value by key. A miss is a successful response with
/// `found: false`, not an error.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let key = normalize_key(&key);
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }

    // Acquire write lock (a hit moves the entry to MRU and bumps stats)
    let value = {
        let mut cache = state.cache.write().await;
        cache.get(&key).map(str::to_owned)
    };

    let response = match value {
        Some(value) => {
            state.log.write().await.push(format!("GET {} -> hit", key));
            GetResponse::hit(key, value)
        }
        None => {
            state.log.write().await.push(format!("GET {} -> miss", key));
            GetResponse::miss(key)
        }
    };

    Ok(Json(response))
}

/// Handler for GET /snapshot
///
/// Renders the cache as exactly `capacity` slots in recency order, LRU
/// first, with empty slots explicit. Pure read: no counter moves.
pub async fn snapshot_handler(State(state): State<AppState>) -> Json<SnapshotResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(SnapshotResponse::new(
        cache.capacity(),
        &stats,
        cache.snapshot(),
    ))
}

/// Handler for POST /reset
///
/// Discards all entries and counters. A supplied capacity is clamped
/// into the configured range before reaching the core.
pub async fn reset_handler(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<ResetResponse>> {
    let requested = req.capacity.map(|c| state.config.clamp_capacity(c));

    let capacity = {
        let mut cache = state.cache.write().await;
        cache.reset(requested)?;
        cache.capacity()
    };

    state
        .log
        .write()
        .await
        .push(format!("RESET -> capacity {}", capacity));

    Ok(Json(ResetResponse::new(capacity)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(&stats, cache.len()))
}

/// Handler for GET /log
///
/// Returns the rolling operation log, oldest line first.
pub async fn log_handler(State(state): State<AppState>) -> Json<LogResponse> {
    let log = state.log.read().await;
    Json(LogResponse::new(log.entries()))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(capacity: usize) -> AppState {
        let cache = CacheStore::new(capacity).unwrap();
        AppState::new(cache, Config::default())
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = test_state(3);

        // Store a value
        let req = PutRequest {
            key: "test_key".to_string(),
            value: "test_value".to_string(),
        };
        let result = put_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        // Get the value (the handler normalizes the key the same way)
        let result = get_handler(State(state.clone()), Path("test_key".to_string())).await;
        let response = result.unwrap();
        assert!(response.found);
        assert_eq!(response.value.as_deref(), Some("test_value"));
    }

    #[tokio::test]
    async fn test_get_miss_is_not_an_error() {
        let state = test_state(3);

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        let response = result.unwrap();
        assert!(!response.found);
        assert!(response.value.is_none());
    }

    #[tokio::test]
    async fn test_put_normalizes_key() {
        let state = test_state(3);

        let req = PutRequest {
            key: "  apple ".to_string(),
            value: "red".to_string(),
        };
        let response = put_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.key, "APPLE");

        let result = get_handler(State(state), Path("Apple".to_string())).await;
        let response = result.unwrap();
        assert!(response.found);
    }

    #[tokio::test]
    async fn test_put_invalid_request() {
        let state = test_state(3);

        let req = PutRequest {
            key: "".to_string(), // Empty key is invalid
            value: "value".to_string(),
        };
        let result = put_handler(State(state), Json(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_snapshot_handler_pads_slots() {
        let state = test_state(3);

        let req = PutRequest {
            key: "a".to_string(),
            value: "1".to_string(),
        };
        put_handler(State(state.clone()), Json(req)).await.unwrap();

        let response = snapshot_handler(State(state)).await;
        assert_eq!(response.capacity, 3);
        assert_eq!(response.size, 1);
        assert_eq!(response.slots.len(), 3);
        assert!(response.slots[0].occupied);
        assert!(!response.slots[1].occupied);
    }

    #[tokio::test]
    async fn test_reset_handler_clamps_capacity() {
        let state = test_state(3);

        // Requested capacity far above the configured ceiling of 10
        let req = ResetRequest { capacity: Some(99) };
        let response = reset_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.capacity, 10);

        // And far below the floor of 1
        let req = ResetRequest { capacity: Some(0) };
        let response = reset_handler(State(state), Json(req)).await.unwrap();
        assert_eq!(response.capacity, 1);
    }

    #[tokio::test]
    async fn test_handlers_fill_the_op_log() {
        let state = test_state(2);

        let req = PutRequest {
            key: "a".to_string(),
            value: "1".to_string(),
        };
        put_handler(State(state.clone()), Json(req)).await.unwrap();
        get_handler(State(state.clone()), Path("a".to_string()))
            .await
            .unwrap();
        get_handler(State(state.clone()), Path("zzz".to_string()))
            .await
            .unwrap();

        let response = log_handler(State(state)).await;
        assert_eq!(
            response.entries,
            vec!["PUT A -> size 1", "GET A -> hit", "GET ZZZ -> miss"]
        );
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state(3);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
