//! The host side of the plugin contract.
//!
//! - [`driver`] -- Runs a main query through the plugin's hook pipeline.
//! - [`lifecycle`] -- Dispatches post lifecycle events to the plugin.
//!
//! Everything here is synchronous. The per-request pipeline is not `Send`
//! and must not be held across an `.await`.

pub mod driver;
pub mod lifecycle;
