//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /put` - Store a key-value pair
//! - `GET /get/:key` - Look up a value by key
//! - `GET /snapshot` - Ordered view of all slots
//! - `POST /reset` - Discard entries and counters, optionally re-size
//! - `GET /stats` - Cache statistics
//! - `GET /log` - Rolling operation log
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod oplog;
pub mod routes;

pub use handlers::*;
pub use oplog::OpLog;
pub use routes::create_router;
