//! Built-in status controller
//!
//! Reports what the registry holds. Registered through the controller
//! slice like any user controller, which keeps the discovery path
//! exercised even in an application that defines no controllers of its
//! own.

use std::collections::BTreeMap;
use std::sync::Arc;

use agb_infrastructure::config::AppConfig;
use agb_infrastructure::registry::ProviderRegistry;
use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket, Route, State};
use serde::Serialize;

use crate::controller::{ControllerEntry, RestController, CONTROLLERS};

/// Status endpoint payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Application name
    pub app: String,
    /// Configured HTTP port
    pub port: u16,
    /// Provider counts for categories with at least one registration
    pub providers: BTreeMap<String, usize>,
    /// Providers across all categories
    pub total_providers: usize,
    /// Registered agent names, sorted
    pub agents: Vec<String>,
}

/// Handler state for the status controller
struct StatusState {
    registry: Arc<ProviderRegistry>,
    config: Arc<AppConfig>,
}

#[get("/")]
fn status_index(state: &State<StatusState>) -> Json<StatusResponse> {
    let registry = &state.registry;

    let mut providers = BTreeMap::new();
    for category in registry.categories() {
        let count = registry.provider_count(*category);
        if count > 0 {
            providers.insert(category.to_string(), count);
        }
    }

    let mut agents: Vec<String> = registry
        .agents()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    agents.sort();

    Json(StatusResponse {
        app: state.config.app.name.clone(),
        port: state.config.server.port,
        providers,
        total_providers: registry.total_provider_count(),
        agents,
    })
}

/// Controller serving `/status`
pub struct StatusController {
    registry: Arc<ProviderRegistry>,
    config: Arc<AppConfig>,
}

impl RestController for StatusController {
    fn base_path(&self) -> &'static str {
        "/status"
    }

    fn routes(&self) -> Vec<Route> {
        routes![status_index]
    }

    fn attach(self: Arc<Self>, rocket: Rocket<Build>) -> Rocket<Build> {
        rocket.manage(StatusState {
            registry: Arc::clone(&self.registry),
            config: Arc::clone(&self.config),
        })
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CONTROLLERS)]
static STATUS_CONTROLLER: ControllerEntry = ControllerEntry {
    name: "status",
    factory: |beans| {
        let registry = beans
            .resolve::<ProviderRegistry>()
            .map_err(|e| e.to_string())?;
        let config = beans.resolve::<AppConfig>().map_err(|e| e.to_string())?;
        Ok(Arc::new(StatusController { registry, config }))
    },
};
