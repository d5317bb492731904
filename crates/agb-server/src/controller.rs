//! Controller contract and registration
//!
//! Controllers register through a distributed slice like every other
//! catalog entry, but the slice lives in this crate: an entry's factory
//! produces a Rocket-aware trait object, and only the HTTP layer speaks
//! Rocket.

use std::sync::Arc;

use agb_domain::ports::BeanSource;
use rocket::{Build, Rocket, Route};

/// A controller mountable on the server
///
/// Implementations declare their routes with Rocket's handler macros and
/// hand any handler state to the instance via [`RestController::attach`].
pub trait RestController: Send + Sync + 'static {
    /// Mount point for the controller's routes
    fn base_path(&self) -> &'static str;

    /// Routes to mount under the base path
    fn routes(&self) -> Vec<Route>;

    /// Install managed state (or other fairings) before mounting
    fn attach(self: Arc<Self>, rocket: Rocket<Build>) -> Rocket<Build>;
}

/// Registry entry for a controller
///
/// The factory resolves the controller's dependencies through the bean
/// container, so a controller is wired exactly like any other component.
pub struct ControllerEntry {
    /// Controller name (diagnostics and logs)
    pub name: &'static str,
    /// Factory invoked at server build time
    pub factory: fn(&dyn BeanSource) -> Result<Arc<dyn RestController>, String>,
}

// Auto-collection via linkme distributed slices - controllers submit
// entries at compile time
#[linkme::distributed_slice]
pub static CONTROLLERS: [ControllerEntry] = [..];

/// All registered controller entries
pub fn scan_controllers() -> Vec<&'static ControllerEntry> {
    CONTROLLERS.iter().collect()
}

impl std::fmt::Debug for ControllerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerEntry")
            .field("name", &self.name)
            .finish()
    }
}
