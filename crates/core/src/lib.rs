//! Homepage domain logic.
//!
//! Everything here talks to the host through the traits in [`ports`]; the
//! crate owns no storage and performs no I/O of its own.

pub mod config;
pub mod context;
pub mod error;
pub mod filters;
pub mod interceptor;
pub mod invalidator;
pub mod notices;
pub mod plugin;
pub mod ports;
pub mod post;
pub mod query;
pub mod registrar;
pub mod resolver;
pub mod rest_guard;
pub mod settings;
pub mod tracker;
pub mod types;
pub mod visibility;

#[cfg(test)]
mod testing;
