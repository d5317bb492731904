//! In-memory key-value memory store
//!
//! Holds agent memory as JSON values in a concurrent map. Contents live
//! as long as the instance; nothing is persisted.

use agb_domain::ports::ProviderInstance;
use dashmap::DashMap;

/// Concurrent in-memory key-value store
pub struct InMemoryStore {
    entries: DashMap<String, serde_json::Value>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store a value under a key, replacing any previous value
    pub fn remember(&self, key: impl Into<String>, value: serde_json::Value) {
        self.entries.insert(key.into(), value);
    }

    /// Fetch the value stored under a key
    pub fn recall(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Remove a key; returns whether anything was removed
    pub fn forget(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderInstance for InMemoryStore {
    fn provider_name(&self) -> &str {
        "in-memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agb_application::registry::{ProviderConfig, ProviderEntry, PROVIDERS};
use agb_domain::value_objects::ProviderCategory;

#[linkme::distributed_slice(PROVIDERS)]
static IN_MEMORY_STORE: ProviderEntry = ProviderEntry {
    category: ProviderCategory::Memory,
    name: "in-memory",
    description: "Process-local key-value memory store",
    factory: |_config: &ProviderConfig| Ok(std::sync::Arc::new(InMemoryStore::new())),
};
