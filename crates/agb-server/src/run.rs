//! High-level entry point
//!
//! Configure, ignite, serve - the whole startup in one call, used by the
//! `agentic-boot` binary and by embedders that want the default wiring.

use std::path::Path;

use agb_domain::error::Result;
use agb_infrastructure::bootstrap::{ignite_with_config, AppDescriptor};
use agb_infrastructure::config::ConfigLoader;
use agb_infrastructure::logging::init_logging;

use crate::builder::serve;

/// Load configuration, initialize logging, ignite, and serve
///
/// `config_path` overrides the default configuration file search. The
/// descriptor's overrides win over file and environment values.
pub async fn run(config_path: Option<&Path>, descriptor: AppDescriptor) -> Result<()> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let ctx = ignite_with_config(&descriptor, config)?;
    serve(ctx).await
}
