//! Figment-based configuration loading

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::env;
use std::path::{Path, PathBuf};

use agb_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader
#[derive(Clone)]
pub struct ConfigLoader {
    /// Explicit configuration file path, when given
    config_path: Option<PathBuf>,
    /// Environment variable prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set an explicit configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources merge in order, later overriding earlier:
    /// 1. `AppConfig::default()`
    /// 2. TOML file (explicit path, else `agenticboot.toml` in the working
    ///    directory or its `config/` subdirectory)
    /// 3. Environment variables with the prefix (e.g. `AGB_SERVER_PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Underscore-separated nesting: AGB_SERVER_PORT -> server.port
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Serialize configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let rendered =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), rendered)?;
        Ok(())
    }

    /// The explicit configuration file path, when one was set
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;
        let candidates = [
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        candidates.into_iter().find(|path| path.exists())
    }

    fn validate(&self, config: &AppConfig) -> Result<()> {
        if config.app.name.trim().is_empty() {
            return Err(Error::configuration("app.name must not be empty"));
        }
        if config.event_bus.dispatch_concurrency == 0 {
            return Err(Error::configuration(
                "event_bus.dispatch_concurrency must be at least 1",
            ));
        }
        // Fails fast on an unparseable level instead of at logging init.
        parse_log_level(&config.logging.level)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_with_missing_file_uses_defaults() {
        let loader = ConfigLoader::new().with_config_path("/nonexistent/agenticboot.toml");
        let config = loader.load().unwrap();
        assert_eq!(config.server.port, crate::constants::DEFAULT_SERVER_PORT);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[app]\nname = \"demo\"\n\n[server]\nport = 9090").unwrap();

        let loader = ConfigLoader::new().with_config_path(file.path());
        let config = loader.load().unwrap();
        assert_eq!(config.app.name, "demo");
        assert_eq!(config.server.port, 9090);
        // Untouched sections keep their defaults.
        assert_eq!(
            config.event_bus.dispatch_concurrency,
            crate::constants::DEFAULT_EVENT_DISPATCH_CONCURRENCY
        );
    }

    #[test]
    fn invalid_level_is_rejected_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

        let loader = ConfigLoader::new().with_config_path(file.path());
        assert!(loader.load().is_err());
    }

    #[test]
    fn zero_dispatch_concurrency_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[event_bus]\ndispatch_concurrency = 0").unwrap();

        let loader = ConfigLoader::new().with_config_path(file.path());
        assert!(loader.load().is_err());
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");
        let loader = ConfigLoader::new();
        let mut config = AppConfig::default();
        config.server.port = 4321;

        loader.save_to_file(&config, &path).unwrap();
        let reloaded = loader.with_config_path(&path).load().unwrap();
        assert_eq!(reloaded.server.port, 4321);
    }
}
