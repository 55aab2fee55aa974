//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_handler, health_handler, log_handler, put_handler, reset_handler, snapshot_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /put` - Store a key-value pair
/// - `GET /get/:key` - Look up a value by key
/// - `GET /snapshot` - Ordered view of all slots
/// - `POST /reset` - Discard entries and counters, optionally re-size
/// - `GET /stats` - Cache statistics
/// - `GET /log` - Rolling operation log
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/put", put(put_handler))
        .route("/get/:key", get(get_handler))
        .route("/snapshot", get(snapshot_handler))
        .route("/reset", post(reset_handler))
        .route("/stats", get(stats_handler))
        .route("/log", get(log_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
