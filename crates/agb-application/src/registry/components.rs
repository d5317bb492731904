//! Component Registry
//!
//! Auto-registration for container-managed components. Each entry carries a
//! type-erased factory the container installs as a lazy bean factory; the
//! factory resolves its dependencies through the [`BeanSource`] it is
//! handed, which is where constructor injection happens.

use std::any::{Any, TypeId};
use std::sync::Arc;

use agb_domain::ports::BeanSource;
use agb_domain::value_objects::ComponentKind;

/// Type-erased component factory
///
/// Returns the constructed bean or a message describing why construction
/// failed. A plain `fn` pointer so entries are constructible in statics.
pub type ComponentFactory =
    fn(&dyn BeanSource) -> Result<Arc<dyn Any + Send + Sync>, String>;

/// Registry entry for a container-managed component
pub struct ComponentEntry {
    /// Short component name (diagnostics and logs)
    pub name: &'static str,
    /// Role of the component
    pub kind: ComponentKind,
    /// Fully qualified type name (diagnostics)
    pub type_name: &'static str,
    /// Accessor for the component's `TypeId` (the container key)
    pub type_id: fn() -> TypeId,
    /// Factory invoked on first `get_bean` lookup
    pub factory: ComponentFactory,
}

// Auto-collection via linkme distributed slices - components submit entries
// at compile time
#[linkme::distributed_slice]
pub static COMPONENTS: [ComponentEntry] = [..];

impl std::fmt::Debug for ComponentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish()
    }
}
