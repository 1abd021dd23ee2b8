//! Host services the homepage logic depends on.
//!
//! Each port is a narrow view of a host subsystem. Implementations live
//! outside this crate (see `homepages-db` for in-memory ones) and are shared
//! across requests, hence the `Send + Sync` bounds.

use std::time::Duration;

use crate::error::CoreError;
use crate::post::Post;
use crate::query::QueryDescription;
use crate::registrar::ContentTypeDefinition;
use crate::types::DocumentId;

/// Ephemeral key-value store with per-entry expiry.
pub trait TransientCache: Send + Sync {
    /// Return the stored value, or `None` when absent or expired.
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Store a value. A zero `ttl` means the entry never expires.
    /// Returns `false` when the store refused the write.
    fn set(&self, key: &str, value: serde_json::Value, ttl: Duration) -> bool;

    /// Remove a value. Returns `true` when something was removed.
    fn delete(&self, key: &str) -> bool;
}

/// Durable key-value settings store.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Returns `false` when the value was unchanged or the write failed.
    fn update(&self, key: &str, value: serde_json::Value) -> bool;
}

/// Read access to the host's documents through its query engine.
pub trait DocumentStore: Send + Sync {
    /// Execute a query and return the matching documents in the host's
    /// default order (newest publication first).
    fn query(&self, query: &QueryDescription) -> Vec<Post>;

    fn get_post(&self, id: DocumentId) -> Option<Post>;

    fn post_type_of(&self, id: DocumentId) -> Option<String> {
        self.get_post(id).map(|post| post.post_type)
    }
}

/// The host's content-type registry.
pub trait ContentTypeRegistry {
    fn register_post_type(&self, definition: ContentTypeDefinition) -> Result<(), CoreError>;
}
