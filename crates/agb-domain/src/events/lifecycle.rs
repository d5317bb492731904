//! Framework lifecycle events

use crate::value_objects::ProviderCategory;
use serde::{Deserialize, Serialize};

/// Published once the application context is fully wired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStarted {
    /// Application name from the descriptor
    pub name: String,
    /// Port the HTTP layer will bind
    pub port: u16,
}

/// Published at the start of context shutdown, before listeners are cleared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStopping {
    /// Application name from the descriptor
    pub name: String,
}

/// Published when a provider lands in the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRegistered {
    /// Category the provider registered under
    pub category: ProviderCategory,
    /// Name within the category
    pub name: String,
}

/// Published when an agent lands in the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRegistered {
    /// Registered agent name
    pub name: String,
}
