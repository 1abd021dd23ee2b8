use std::sync::Arc;

use homepages_core::types::Timestamp;

/// Source of "now" for stores that stamp or expire entries.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Wall-clock time.
pub fn system_clock() -> Clock {
    Arc::new(chrono::Utc::now)
}
