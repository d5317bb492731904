//! Lifecycle event types
//!
//! Published on the event bus by the bootstrap routine and the provider
//! registry. Any `'static + Send + Sync` type can be an event; these are
//! the ones the framework itself emits.

/// Framework lifecycle events
pub mod lifecycle;

pub use lifecycle::{AgentRegistered, ApplicationStarted, ApplicationStopping, ProviderRegistered};
