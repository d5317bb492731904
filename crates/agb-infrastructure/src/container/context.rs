//! Container storage and registration surface

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::Arc;

use agb_application::registry::ComponentEntry;
use agb_domain::error::Result;
use agb_domain::ports::BeanSource;
use dashmap::DashMap;
use tracing::{debug, warn};

use super::resolver::BeanResolver;

/// Type-erased bean produced by a factory
pub(crate) type AnyBean = Arc<dyn Any + Send + Sync>;

/// A registered lazy factory plus the diagnostics name of its product
pub(crate) struct FactoryEntry {
    pub(crate) type_name: &'static str,
    pub(crate) factory: Box<dyn Fn(&dyn BeanSource) -> Result<AnyBean> + Send + Sync>,
}

/// Type-keyed dependency-injection container
///
/// Singletons and factories are keyed by `TypeId`. Registration happens
/// during single-threaded bootstrap; afterwards the container is read-only
/// by convention (lookups are concurrency-safe, concurrent registration
/// during resolution is not supported).
pub struct AgenticContext {
    singletons: DashMap<TypeId, AnyBean>,
    factories: DashMap<TypeId, Arc<FactoryEntry>>,
}

impl AgenticContext {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            singletons: DashMap::new(),
            factories: DashMap::new(),
        }
    }

    /// Register an already-constructed singleton
    ///
    /// Replacing an existing singleton of the same type is allowed with a
    /// warning, not an error.
    pub fn register_singleton<T: Any + Send + Sync>(&self, instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        if self
            .singletons
            .insert(TypeId::of::<T>(), instance)
            .is_some()
        {
            warn!("Replacing existing singleton registration for {type_name}");
        } else {
            debug!("Registered singleton {type_name}");
        }
    }

    /// Register a lazy factory for a bean type
    ///
    /// The factory is not invoked until the first `get_bean` lookup. Its
    /// dependencies are resolved through the [`BeanSource`] it receives.
    pub fn register_factory<T, F>(&self, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&dyn BeanSource) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        let erased = FactoryEntry {
            type_name,
            factory: Box::new(move |beans| factory(beans).map(|bean| bean as AnyBean)),
        };
        if self
            .factories
            .insert(TypeId::of::<T>(), Arc::new(erased))
            .is_some()
        {
            warn!("Replacing existing factory registration for {type_name}");
        } else {
            debug!("Registered factory for {type_name}");
        }
    }

    /// Register a catalog component entry as a lazy factory
    pub fn register_component(&self, entry: &'static ComponentEntry) {
        let erased = FactoryEntry {
            type_name: entry.type_name,
            factory: Box::new(move |beans| {
                (entry.factory)(beans).map_err(|message| {
                    agb_domain::error::Error::container(format!(
                        "component '{}' construction failed: {message}",
                        entry.name
                    ))
                })
            }),
        };
        if self
            .factories
            .insert((entry.type_id)(), Arc::new(erased))
            .is_some()
        {
            warn!(
                "Replacing existing factory registration for {}",
                entry.type_name
            );
        }
    }

    /// Resolve a bean, constructing and caching it on first lookup
    ///
    /// Fails with `BeanNotFound` when neither a singleton nor a factory is
    /// registered, and with `CircularDependency` when construction
    /// re-enters a type already on the resolution path.
    pub fn get_bean<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        let resolver = BeanResolver::new(self);
        (&resolver as &dyn BeanSource).resolve::<T>()
    }

    /// Whether a singleton or factory is registered for `T`
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.singletons.contains_key(&type_id) || self.factories.contains_key(&type_id)
    }

    /// Number of distinct bean types known to the container
    pub fn bean_count(&self) -> usize {
        let mut types: HashSet<TypeId> = HashSet::new();
        for entry in self.singletons.iter() {
            types.insert(*entry.key());
        }
        for entry in self.factories.iter() {
            types.insert(*entry.key());
        }
        types.len()
    }

    /// Drop every registration and cached instance
    ///
    /// No destructor hooks are invoked; instances die when their last
    /// `Arc` does.
    pub fn close(&self) {
        self.singletons.clear();
        self.factories.clear();
        debug!("Container closed");
    }

    pub(crate) fn cached(&self, type_id: TypeId) -> Option<AnyBean> {
        self.singletons.get(&type_id).map(|bean| Arc::clone(&bean))
    }

    pub(crate) fn factory(&self, type_id: TypeId) -> Option<Arc<FactoryEntry>> {
        self.factories.get(&type_id).map(|entry| Arc::clone(&entry))
    }

    /// Cache a factory product; an earlier concurrent resolution wins
    pub(crate) fn cache(&self, type_id: TypeId, bean: AnyBean) -> AnyBean {
        Arc::clone(
            self.singletons
                .entry(type_id)
                .or_insert(bean)
                .value(),
        )
    }
}

impl Default for AgenticContext {
    fn default() -> Self {
        Self::new()
    }
}
