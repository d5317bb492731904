//! Configuration types and loader
//!
//! Configuration merges three sources, later overriding earlier:
//! defaults, an `agenticboot.toml` file, and `AGB_`-prefixed environment
//! variables.

/// Figment-based configuration loading
pub mod loader;
/// Configuration section types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AppSection, EventBusConfig, LoggingConfig, ServerConfig};
