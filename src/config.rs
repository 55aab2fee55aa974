//! Configuration Module
//!
//! Handles loading and managing service configuration from environment
//! variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of slots the cache starts with
    pub capacity: usize,
    /// Smallest capacity a caller may request
    pub min_capacity: usize,
    /// Largest capacity a caller may request
    pub max_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Number of lines kept in the rolling operation log
    pub log_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// The initial capacity is clamped into the configured range, and the
    /// clamp floor is never allowed below 1.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Initial number of cache slots (default: 4)
    /// - `MIN_CAPACITY` - Lower bound for requested capacities (default: 1)
    /// - `MAX_CAPACITY` - Upper bound for requested capacities (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LOG_CAPACITY` - Rolling operation log length (default: 10)
    pub fn from_env() -> Self {
        let min_capacity: usize = env::var("MIN_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);
        let min_capacity = min_capacity.max(1);

        let max_capacity: usize = env::var("MAX_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let max_capacity = max_capacity.max(min_capacity);

        let mut config = Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            min_capacity,
            max_capacity,
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_capacity: env::var("LOG_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        };
        config.capacity = config.clamp_capacity(config.capacity);
        config
    }

    /// Clamps a requested capacity into the configured range.
    ///
    /// Applied to every user-supplied capacity before it reaches the
    /// cache, so the core only ever sees positive values.
    pub fn clamp_capacity(&self, requested: usize) -> usize {
        requested.clamp(self.min_capacity, self.max_capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 4,
            min_capacity: 1,
            max_capacity: 10,
            server_port: 3000,
            log_capacity: 10,
        }
    }
}
