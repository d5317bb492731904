//! Provider Registry Entries
//!
//! Auto-registration for pluggable providers using linkme distributed
//! slices. Providers register themselves under a category from the fixed
//! [`ProviderCategory`] set and are discovered at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use agb_domain::ports::ProviderInstance;
use agb_domain::value_objects::ProviderCategory;

/// Configuration handed to a provider factory
///
/// Contains the configuration options a provider might need. Providers use
/// what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Provider name to instantiate (e.g. "echo", "in-memory")
    pub name: String,
    /// Endpoint or connection URI
    pub uri: Option<String>,
    /// API key for authenticated backends
    pub api_key: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ProviderConfig {
    /// Create a config selecting the given provider name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the connection URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for a provider
///
/// Each provider implementation registers itself with this entry using
/// `#[linkme::distributed_slice(PROVIDERS)]`. The entry carries metadata
/// and a factory function to create instances.
pub struct ProviderEntry {
    /// Category the provider belongs to
    pub category: ProviderCategory,
    /// Unique provider name within the category
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a provider instance
    pub factory: fn(&ProviderConfig) -> Result<Arc<dyn ProviderInstance>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries
// at compile time
#[linkme::distributed_slice]
pub static PROVIDERS: [ProviderEntry] = [..];

impl std::fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("category", &self.category)
            .field("name", &self.name)
            .finish()
    }
}

/// Resolve a provider by category and configured name
///
/// Searches the registry for an entry matching `(category, config.name)`
/// and creates an instance using the entry's factory function.
pub fn resolve_provider(
    category: ProviderCategory,
    config: &ProviderConfig,
) -> Result<Arc<dyn ProviderInstance>, String> {
    for entry in PROVIDERS {
        if entry.category == category && entry.name == config.name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = PROVIDERS
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.name)
        .collect();

    Err(format!(
        "Unknown {category} provider '{}'. Available providers: {available:?}",
        config.name
    ))
}

/// List registered providers for a category
///
/// Returns `(name, description)` tuples. Useful for CLI help and the
/// status endpoint.
pub fn list_providers(category: ProviderCategory) -> Vec<(&'static str, &'static str)> {
    PROVIDERS
        .iter()
        .filter(|e| e.category == category)
        .map(|e| (e.name, e.description))
        .collect()
}
