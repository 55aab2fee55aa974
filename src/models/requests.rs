//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies, plus the key
//! normalization applied at the boundary before anything reaches the
//! cache core.

use serde::Deserialize;

// == Boundary Limits ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Key Normalization ==
/// Normalizes a raw key before it reaches the cache core.
///
/// Surrounding whitespace is trimmed and the key is upper-cased. This is
/// presentation-layer policy; the core treats keys as opaque.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Request body for the PUT operation (PUT /put)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.trim().is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

/// Request body for the RESET operation (POST /reset)
///
/// An omitted capacity keeps the current one; a supplied capacity is
/// clamped into the configured range before reaching the core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetRequest {
    /// Optional replacement capacity
    #[serde(default)]
    pub capacity: Option<usize>,
}
