//! Request and Response models for the cache service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! key normalization applied at the API boundary.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{normalize_key, PutRequest, ResetRequest, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
pub use responses::{
    ErrorResponse, GetResponse, HealthResponse, LogResponse, PutResponse, ResetResponse,
    SlotResponse, SnapshotResponse, StatsResponse,
};
