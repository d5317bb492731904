//! Configuration section types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_EVENT_DISPATCH_CONCURRENCY, DEFAULT_SERVER_ADDRESS,
    DEFAULT_SERVER_PORT,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application identity
    pub app: AppSection,
    /// HTTP server binding
    pub server: ServerConfig,
    /// Event bus tuning
    pub event_bus: EventBusConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

/// Application identity section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Application name, used in lifecycle events and logs
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// HTTP server binding section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVER_ADDRESS.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Event bus tuning section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// Maximum async listeners running concurrently; further deliveries
    /// queue on the runtime without blocking publishers
    pub dispatch_concurrency: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            dispatch_concurrency: DEFAULT_EVENT_DISPATCH_CONCURRENCY,
        }
    }
}

/// Logging setup section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter (`trace`..`error`); `AGB_LOG` overrides
    pub level: String,
    /// Emit JSON-structured lines instead of human-readable ones
    pub json_format: bool,
    /// Optional file to also write logs to (daily rotation)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, DEFAULT_APP_NAME);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(
            config.event_bus.dispatch_concurrency,
            DEFAULT_EVENT_DISPATCH_CONCURRENCY
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("[server]\nport = 9999\n").unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.address, DEFAULT_SERVER_ADDRESS);
        assert_eq!(config.app.name, DEFAULT_APP_NAME);
    }
}
