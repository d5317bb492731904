//! agentic-boot - Entry Point
//!
//! Binary entry point for the default agentic-boot server: built-in
//! providers, the status controller, and whatever the linked build
//! registered in the catalog.

// Force-link agb-providers to ensure linkme registrations are included
extern crate agb_providers;

use clap::Parser;
use agb_infrastructure::bootstrap::AppDescriptor;
use agb_server::run;

/// Command line interface for agentic-boot
#[derive(Parser, Debug)]
#[command(name = "agentic-boot")]
#[command(about = "agentic-boot - agent-oriented application server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Application name (overrides configuration)
    #[arg(long, default_value = "agentic-boot")]
    pub name: String,

    /// HTTP port (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut descriptor = AppDescriptor::new(cli.name);
    if let Some(port) = cli.port {
        descriptor = descriptor.with_port(port);
    }

    run(cli.config.as_deref(), descriptor).await?;
    Ok(())
}
