//! Cache Module
//!
//! Fixed-capacity in-memory key-value store with LRU eviction and
//! hit/miss accounting.

mod lru;
mod snapshot;
mod stats;
mod store;


// Re-export public types
pub use lru::{Handle, Keys, RecencyList};
pub use snapshot::{Snapshot, SnapshotEntry};
pub use stats::CacheStats;
pub use store::{CacheStore, PutOutcome};
