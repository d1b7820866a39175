//! Message store core and public API surface.
//!
//! This crate owns the session's message list, resolves the aggregate
//! severity indicator from it, and routes bridge commands from a
//! presentation layer to the store.

pub mod config;
pub mod hub;
pub mod notifier;
pub mod severity;
pub mod store;

#[cfg(test)]
mod strategies;

pub use crate::hub::MessageHub;
pub use crate::notifier::{ChannelNotifier, NoopNotifier, Notifier};
pub use crate::store::MessageStore;
