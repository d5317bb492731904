//! Type-keyed publish/subscribe event bus

/// Event bus implementation
pub mod bus;

pub use bus::{EventBus, SubscriptionId};
