//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "AGB";

/// Default configuration file name searched in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "agenticboot.toml";

/// Subdirectory also searched for the configuration file
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Default application name when none is configured
pub const DEFAULT_APP_NAME: &str = "agentic-boot";

/// Default bind address for the HTTP layer
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";

/// Default port for the HTTP layer
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default number of async event listeners allowed to run concurrently
pub const DEFAULT_EVENT_DISPATCH_CONCURRENCY: usize = 10;

/// Environment variable consulted for log filtering before config
pub const LOG_FILTER_ENV: &str = "AGB_LOG";
