//! # agentic-boot Infrastructure Layer
//!
//! Concrete machinery behind the framework: the bean container, the
//! provider registry, the event bus, configuration loading, logging setup,
//! and the bootstrap routine that wires everything into an [`AppContext`].

/// Application bootstrap and context
pub mod bootstrap;
/// Configuration types and loader
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Bean container and resolution
pub mod container;
/// Error context extension utilities
pub mod error_ext;
/// Type-keyed publish/subscribe event bus
pub mod events;
/// Structured logging setup
pub mod logging;
/// Provider registry
pub mod registry;

pub use bootstrap::{ignite, ignite_with_config, AppContext, AppDescriptor};
pub use config::{AppConfig, ConfigLoader, EventBusConfig, LoggingConfig, ServerConfig};
pub use container::{AgenticContext, BeanResolver};
pub use events::{EventBus, SubscriptionId};
pub use logging::init_logging;
pub use registry::ProviderRegistry;
