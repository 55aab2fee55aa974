//! Slotcache - a fixed-capacity in-memory LRU cache service
//!
//! Provides a slot-bounded key-value cache with LRU eviction, hit/miss
//! accounting, and an ordered snapshot view, served over a JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
