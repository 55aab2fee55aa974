//! Cache Store Module
//!
//! Main cache engine combining HashMap lookup with an explicit recency
//! order for LRU eviction.

use std::collections::HashMap;

use crate::cache::{CacheStats, Handle, RecencyList, Snapshot};
use crate::error::{CacheError, Result};

// == Slot ==
/// A stored value plus the handle of its node in the recency order.
#[derive(Debug)]
struct Slot {
    handle: Handle,
    value: String,
}

// == Put Outcome ==
/// Result of a put: the cache size afterwards, and the key that was
/// evicted to make room (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOutcome {
    /// Number of entries after the put
    pub size: usize,
    /// Key removed by LRU eviction, None when nothing was evicted
    pub evicted: Option<String>,
}

// == Cache Store ==
/// Fixed-capacity key-value cache with LRU eviction.
///
/// Pairs a `HashMap` from key to value with a [`RecencyList`] encoding
/// access order, so lookup, insert, and evict are all O(1). The capacity
/// is fixed at construction; `reset` is the only way to change it.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage, one slot per distinct key
    entries: HashMap<String, Slot>,
    /// Recency order over the stored keys
    order: RecencyList,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries; always at least 1
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// A capacity of zero is rejected here rather than handled per-call:
    /// every live cache can hold at least one entry.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Looks up a key, marking it most recently used on a hit.
    ///
    /// A hit bumps the hit counter; a miss bumps the miss counter and
    /// leaves the recency order untouched. Absence is a normal outcome,
    /// not an error.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let handle = match self.entries.get(key) {
            Some(slot) => slot.handle,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        self.order.touch(handle);
        self.stats.record_hit();
        self.entries.get(key).map(|slot| slot.value.as_str())
    }

    // == Put ==
    /// Stores a key-value pair, evicting the LRU entry if needed.
    ///
    /// Overwriting an existing key replaces its value and moves it to the
    /// MRU position; an overwrite never evicts. Inserting a new key while
    /// full evicts exactly the current LRU entry first.
    pub fn put(&mut self, key: String, value: String) -> PutOutcome {
        if let Some(slot) = self.entries.get_mut(&key) {
            slot.value = value;
            let handle = slot.handle;
            self.order.touch(handle);
            return PutOutcome {
                size: self.entries.len(),
                evicted: None,
            };
        }

        let evicted = if self.entries.len() == self.capacity {
            let victim = self.order.pop_lru();
            if let Some(victim_key) = &victim {
                self.entries.remove(victim_key);
                self.stats.record_eviction();
            }
            victim
        } else {
            None
        };

        let handle = self.order.push_mru(key.clone());
        self.entries.insert(key, Slot { handle, value });

        PutOutcome {
            size: self.entries.len(),
            evicted,
        }
    }

    // == Snapshot ==
    /// Returns a lazy view of all entries in ascending recency order.
    ///
    /// Pure read: neither the order nor the counters change.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self)
    }

    // == Reset ==
    /// Discards all entries and zeroes every counter.
    ///
    /// A supplied capacity replaces the old one for the rest of this
    /// cache's lifetime. Capacity zero is rejected before any state
    /// changes, so a failed reset leaves the cache exactly as it was.
    pub fn reset(&mut self, new_capacity: Option<usize>) -> Result<()> {
        if new_capacity == Some(0) {
            return Err(CacheError::InvalidCapacity(0));
        }

        self.entries.clear();
        self.order.clear();
        self.stats.reset();
        if let Some(capacity) = new_capacity {
            self.capacity = capacity;
        }
        Ok(())
    }

    // == Accessors ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Internal (snapshot support) ==
    pub(crate) fn order(&self) -> &RecencyList {
        &self.order
    }

    pub(crate) fn value_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|slot| slot.value.as_str())
    }
}
