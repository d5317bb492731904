//! Agent Registry Entries
//!
//! Auto-registration for agents. Any concrete type implementing the
//! `Agent` trait can submit an entry; since an entry needs a working
//! factory, only constructible types are discoverable.

use std::sync::Arc;

use agb_domain::ports::Agent;

/// Registry entry for an agent
pub struct AgentEntry {
    /// Unique agent name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the agent instance
    pub factory: fn() -> Result<Arc<dyn Agent>, String>,
}

// Auto-collection via linkme distributed slices - agents submit entries at
// compile time
#[linkme::distributed_slice]
pub static AGENTS: [AgentEntry] = [..];

impl std::fmt::Debug for AgentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentEntry")
            .field("name", &self.name)
            .finish()
    }
}

/// Resolve an agent entry by name and create an instance
pub fn resolve_agent(name: &str) -> Result<Arc<dyn Agent>, String> {
    for entry in AGENTS {
        if entry.name == name {
            return (entry.factory)();
        }
    }

    let available: Vec<&str> = AGENTS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown agent '{name}'. Available agents: {available:?}"
    ))
}

/// List all registered agents as `(name, description)` tuples
pub fn list_agents() -> Vec<(&'static str, &'static str)> {
    AGENTS.iter().map(|e| (e.name, e.description)).collect()
}
