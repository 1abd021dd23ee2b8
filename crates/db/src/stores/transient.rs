//! Expiring key-value store.

use std::time::Duration;

use dashmap::DashMap;
use homepages_core::ports::TransientCache;
use homepages_core::types::Timestamp;

use crate::clock::{system_clock, Clock};

struct Entry {
    value: serde_json::Value,
    expires_at: Option<Timestamp>,
}

pub struct MemoryTransientStore {
    entries: DashMap<String, Entry>,
    clock: Clock,
}

impl Default for MemoryTransientStore {
    fn default() -> Self {
        Self::with_clock(system_clock())
    }
}

impl MemoryTransientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, expired ones included until next read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn expiry_for(&self, ttl: Duration) -> Option<Timestamp> {
        if ttl.is_zero() {
            return None;
        }
        let ttl = chrono::Duration::from_std(ttl).ok()?;
        (self.clock)().checked_add_signed(ttl)
    }
}

impl TransientCache for MemoryTransientStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        let now = (self.clock)();
        let is_expired = |entry: &Entry| entry.expires_at.is_some_and(|at| at <= now);
        {
            let entry = self.entries.get(key)?;
            if !is_expired(entry.value()) {
                return Some(entry.value.clone());
            }
        }

        // Only evict what is still stale; a concurrent `set` may have replaced it.
        if self.entries.remove_if(key, |_, entry| is_expired(entry)).is_some() {
            tracing::trace!(key, "Transient expired");
        }
        None
    }

    fn set(&self, key: &str, value: serde_json::Value, ttl: Duration) -> bool {
        let expires_at = self.expiry_for(ttl);
        self.entries
            .insert(key.to_string(), Entry { value, expires_at });
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}
