//! In-memory adapters for the homepage ports.
//!
//! The stores are `Send + Sync` and shared across requests behind `Arc`.
//! Nothing is persisted; a restart starts from an empty site.

pub mod clock;
pub mod models;
pub mod stores;

pub use clock::{system_clock, Clock};
pub use stores::options::MemoryOptionStore;
pub use stores::posts::MemoryPostStore;
pub use stores::transient::MemoryTransientStore;
