//! Application bootstrap
//!
//! `ignite` builds the whole object graph explicitly and returns it as an
//! [`AppContext`] value - nothing is process-global. The sequence mirrors
//! a framework startup: framework singletons first, then the component
//! catalog as lazy factories, then eager materialization of providers and
//! agents into the registry, then the started event.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use agb_application::registry::ProviderConfig;
use agb_application::scanner::{scan, scan_agents, scan_providers};
use agb_domain::error::Result;
use agb_domain::events::{ApplicationStarted, ApplicationStopping};
use tracing::{error, info};

use crate::config::{AppConfig, ConfigLoader};
use crate::container::AgenticContext;
use crate::events::EventBus;
use crate::registry::ProviderRegistry;

/// Bootstrap descriptor - the application's identity and overrides
///
/// A name plus the settings a caller may fix in code rather than
/// configuration.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    /// Application name; overrides `app.name` from configuration
    pub name: String,
    /// Port override; wins over `server.port` when set
    pub port: Option<u16>,
}

impl AppDescriptor {
    /// Describe an application by name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port: None,
        }
    }

    /// Fix the HTTP port in code
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

/// The fully wired application
///
/// Owns the container, registry, event bus, and configuration. Dropping
/// the context without calling [`AppContext::shutdown`] releases memory
/// but skips the stopping event.
pub struct AppContext {
    container: Arc<AgenticContext>,
    registry: Arc<ProviderRegistry>,
    event_bus: Arc<EventBus>,
    config: Arc<AppConfig>,
    closed: AtomicBool,
}

impl AppContext {
    /// The bean container
    pub fn container(&self) -> &Arc<AgenticContext> {
        &self.container
    }

    /// The provider registry
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// The event bus
    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    /// The effective configuration
    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    /// Application name
    pub fn name(&self) -> &str {
        &self.config.app.name
    }

    /// Release the context: publish the stopping event, close the bus,
    /// clear the container
    ///
    /// Idempotent; only the first call does anything.
    pub fn shutdown(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("Shutting down '{}'", self.name());
        self.event_bus.publish(ApplicationStopping {
            name: self.name().to_string(),
        });
        self.event_bus.close();
        self.container.close();
    }
}

/// Bootstrap with configuration loaded from file and environment
pub fn ignite(descriptor: &AppDescriptor) -> Result<AppContext> {
    let config = ConfigLoader::new().load()?;
    ignite_with_config(descriptor, config)
}

/// Bootstrap with an explicit configuration
pub fn ignite_with_config(descriptor: &AppDescriptor, mut config: AppConfig) -> Result<AppContext> {
    config.app.name = descriptor.name.clone();
    if let Some(port) = descriptor.port {
        config.server.port = port;
    }
    let config = Arc::new(config);

    info!("Igniting '{}'", config.app.name);

    // ========================================================================
    // Framework singletons
    // ========================================================================

    let event_bus = Arc::new(EventBus::with_dispatch_concurrency(
        config.event_bus.dispatch_concurrency,
    ));
    let registry = Arc::new(ProviderRegistry::with_event_bus(Arc::clone(&event_bus)));
    let container = Arc::new(AgenticContext::new());

    container.register_singleton(Arc::clone(&config));
    container.register_singleton(Arc::clone(&event_bus));
    container.register_singleton(Arc::clone(&registry));

    // ========================================================================
    // Component catalog -> lazy container factories
    // ========================================================================

    let components = scan();
    for entry in &components {
        container.register_component(*entry);
    }
    info!("Registered {} component factories", components.len());

    // ========================================================================
    // Provider catalog -> registry instances
    // ========================================================================

    let mut provider_count = 0usize;
    for (category, entries) in scan_providers() {
        for entry in entries {
            // A failing entry is skipped, not fatal: one broken provider
            // must not take down an otherwise healthy startup.
            let provider_config = ProviderConfig::new(entry.name);
            match registry.register_provider_entry(entry, &provider_config) {
                Ok(()) => provider_count += 1,
                Err(err) => error!("Skipping {category} provider '{}': {err}", entry.name),
            }
        }
    }

    // ========================================================================
    // Agent catalog -> registry instances
    // ========================================================================

    let mut agent_count = 0usize;
    for entry in scan_agents() {
        match (entry.factory)() {
            Ok(agent) => {
                registry.register_agent(entry.name, agent);
                agent_count += 1;
            }
            Err(err) => error!("Skipping agent '{}': {err}", entry.name),
        }
    }

    info!(
        "Ignited '{}': {} providers, {} agents",
        config.app.name, provider_count, agent_count
    );

    event_bus.publish(ApplicationStarted {
        name: config.app.name.clone(),
        port: config.server.port,
    });

    Ok(AppContext {
        container,
        registry,
        event_bus,
        config,
        closed: AtomicBool::new(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ignite_registers_framework_singletons() {
        let descriptor = AppDescriptor::new("bootstrap-test").with_port(0);
        let ctx = ignite_with_config(&descriptor, AppConfig::default()).unwrap();

        let config = ctx.container().get_bean::<AppConfig>().unwrap();
        assert_eq!(config.app.name, "bootstrap-test");
        assert_eq!(config.server.port, 0);

        let bus = ctx.container().get_bean::<EventBus>().unwrap();
        assert!(Arc::ptr_eq(&bus, ctx.event_bus()));

        let registry = ctx.container().get_bean::<ProviderRegistry>().unwrap();
        assert!(Arc::ptr_eq(&registry, ctx.registry()));
    }

    #[tokio::test]
    async fn started_event_reaches_subscribers_and_shutdown_is_idempotent() {
        use std::sync::Mutex;

        // Subscribe on a context built in two phases: the started event is
        // published during ignite, so observe the stopping event instead.
        let descriptor = AppDescriptor::new("lifecycle-test");
        let ctx = ignite_with_config(&descriptor, AppConfig::default()).unwrap();

        let stopped: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&stopped);
        ctx.event_bus()
            .subscribe::<ApplicationStopping, _>(move |event| {
                sink.lock().unwrap().push(event.name.clone());
            });

        ctx.shutdown();
        ctx.shutdown();

        assert_eq!(*stopped.lock().unwrap(), vec!["lifecycle-test".to_string()]);
        assert_eq!(ctx.event_bus().total_listener_count(), 0);
        assert_eq!(ctx.container().bean_count(), 0);
    }
}
