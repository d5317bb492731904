//! Provider registry
//!
//! Three-level namespace `category -> name -> instance` plus the dedicated
//! agent namespace. Thread-safe via DashMap; lookups clone the `Arc` out
//! so no lock is held while a provider is used.

use std::sync::Arc;

use agb_application::registry::{ProviderConfig, ProviderEntry};
use agb_domain::error::Result;
use agb_domain::events::{AgentRegistered, ProviderRegistered};
use agb_domain::ports::{Agent, ProviderInstance};
use agb_domain::value_objects::ProviderCategory;
use dashmap::DashMap;
use tracing::{debug, warn};

use crate::events::EventBus;

/// Registry of provider and agent instances
///
/// Registration is last-write-wins: replacing an existing entry logs a
/// warning naming both instances so an accidental collision is
/// diagnosable, but hot-swapping a provider is supported.
pub struct ProviderRegistry {
    providers: DashMap<ProviderCategory, DashMap<String, Arc<dyn ProviderInstance>>>,
    agents: DashMap<String, Arc<dyn Agent>>,
    event_bus: Option<Arc<EventBus>>,
}

impl ProviderRegistry {
    /// Create a registry with no event notification
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
            agents: DashMap::new(),
            event_bus: None,
        }
    }

    /// Create a registry that publishes [`ProviderRegistered`] and
    /// [`AgentRegistered`] events on registration
    pub fn with_event_bus(event_bus: Arc<EventBus>) -> Self {
        Self {
            event_bus: Some(event_bus),
            ..Self::new()
        }
    }

    /// Register a provider instance under `(category, name)`
    pub fn register_provider(
        &self,
        category: ProviderCategory,
        name: impl Into<String>,
        instance: Arc<dyn ProviderInstance>,
    ) {
        let name = name.into();
        let by_name = self.providers.entry(category).or_default();
        if let Some(previous) = by_name.insert(name.clone(), instance) {
            warn!(
                "Replacing {category} provider '{name}' (was '{}')",
                previous.provider_name()
            );
        } else {
            debug!("Registered {category} provider '{name}'");
        }
        drop(by_name);

        if let Some(bus) = &self.event_bus {
            bus.publish(ProviderRegistered {
                category,
                name,
            });
        }
    }

    /// Register a provider under a category given by its string name
    ///
    /// Fails when the category is not one of the fixed predeclared set.
    pub fn register_provider_named(
        &self,
        category: &str,
        name: impl Into<String>,
        instance: Arc<dyn ProviderInstance>,
    ) -> Result<()> {
        let category: ProviderCategory = category.parse()?;
        self.register_provider(category, name, instance);
        Ok(())
    }

    /// Materialize a catalog entry and register the produced instance
    ///
    /// Category and name come from the entry itself.
    pub fn register_provider_entry(
        &self,
        entry: &'static ProviderEntry,
        config: &ProviderConfig,
    ) -> Result<()> {
        let instance = (entry.factory)(config).map_err(|message| {
            agb_domain::error::Error::registry(format!(
                "provider '{}' ({}) construction failed: {message}",
                entry.name, entry.category
            ))
        })?;
        self.register_provider(entry.category, entry.name, instance);
        Ok(())
    }

    /// Look up a provider by category and name
    pub fn get_provider(
        &self,
        category: ProviderCategory,
        name: &str,
    ) -> Option<Arc<dyn ProviderInstance>> {
        self.providers
            .get(&category)
            .and_then(|by_name| by_name.get(name).map(|p| Arc::clone(&p)))
    }

    /// All providers registered under a category
    pub fn providers_by_category(
        &self,
        category: ProviderCategory,
    ) -> Vec<(String, Arc<dyn ProviderInstance>)> {
        self.providers
            .get(&category)
            .map(|by_name| {
                by_name
                    .iter()
                    .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of providers registered under a category
    pub fn provider_count(&self, category: ProviderCategory) -> usize {
        self.providers
            .get(&category)
            .map(|by_name| by_name.len())
            .unwrap_or(0)
    }

    /// Number of providers across all categories
    pub fn total_provider_count(&self) -> usize {
        self.providers.iter().map(|by_name| by_name.len()).sum()
    }

    /// Whether `(category, name)` is registered
    pub fn has_provider(&self, category: ProviderCategory, name: &str) -> bool {
        self.providers
            .get(&category)
            .map(|by_name| by_name.contains_key(name))
            .unwrap_or(false)
    }

    /// The fixed category set
    pub fn categories(&self) -> &'static [ProviderCategory] {
        &ProviderCategory::ALL
    }

    /// Register an agent by name
    pub fn register_agent(&self, name: impl Into<String>, instance: Arc<dyn Agent>) {
        let name = name.into();
        if self.agents.insert(name.clone(), instance).is_some() {
            warn!("Replacing agent registration '{name}'");
        } else {
            debug!("Registered agent '{name}'");
        }

        if let Some(bus) = &self.event_bus {
            bus.publish(AgentRegistered { name });
        }
    }

    /// Look up an agent by name
    pub fn get_agent(&self, name: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(name).map(|agent| Arc::clone(&agent))
    }

    /// All registered agents
    pub fn agents(&self) -> Vec<(String, Arc<dyn Agent>)> {
        self.agents
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect()
    }

    /// Number of registered agents
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(&'static str);

    impl ProviderInstance for Stub {
        fn provider_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn lookup_returns_registered_instance_by_identity() {
        let registry = ProviderRegistry::new();
        let instance: Arc<dyn ProviderInstance> = Arc::new(Stub("stub"));
        registry.register_provider(ProviderCategory::Cache, "stub", Arc::clone(&instance));

        let found = registry
            .get_provider(ProviderCategory::Cache, "stub")
            .unwrap();
        assert!(Arc::ptr_eq(&found, &instance));
        assert!(registry.has_provider(ProviderCategory::Cache, "stub"));
        assert_eq!(registry.provider_count(ProviderCategory::Cache), 1);
        assert_eq!(registry.total_provider_count(), 1);
    }

    #[test]
    fn unknown_category_string_fails() {
        let registry = ProviderRegistry::new();
        let err = registry
            .register_provider_named("blockchain", "x", Arc::new(Stub("x")))
            .unwrap_err();
        assert!(matches!(
            err,
            agb_domain::error::Error::UnknownCategory { .. }
        ));
        assert_eq!(registry.total_provider_count(), 0);
    }

    #[test]
    fn known_category_string_registers() {
        let registry = ProviderRegistry::new();
        registry
            .register_provider_named("web-search", "stub", Arc::new(Stub("stub")))
            .unwrap();
        assert!(registry.has_provider(ProviderCategory::WebSearch, "stub"));
    }

    #[test]
    fn duplicate_registration_is_last_write_wins() {
        let registry = ProviderRegistry::new();
        registry.register_provider(ProviderCategory::Tool, "t", Arc::new(Stub("old")));
        registry.register_provider(ProviderCategory::Tool, "t", Arc::new(Stub("new")));

        let found = registry.get_provider(ProviderCategory::Tool, "t").unwrap();
        assert_eq!(found.provider_name(), "new");
        assert_eq!(registry.provider_count(ProviderCategory::Tool), 1);
    }

    #[test]
    fn unknown_lookups_are_absent_not_errors() {
        let registry = ProviderRegistry::new();
        assert!(registry
            .get_provider(ProviderCategory::Email, "nobody")
            .is_none());
        assert!(registry
            .providers_by_category(ProviderCategory::Email)
            .is_empty());
        assert_eq!(registry.provider_count(ProviderCategory::Email), 0);
        assert!(registry.get_agent("nobody").is_none());
    }
}
