//! Catalog Registration System
//!
//! Defines the auto-registration infrastructure for components, providers,
//! and agents. Uses the `linkme` crate for compile-time registration of
//! entries that are discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Registration Flow                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Component defines:  #[linkme::distributed_slice(COMPONENTS)]│
//! │                         static ENTRY: ComponentEntry = ...      │
//! │                               ↓                                 │
//! │  2. Registry declares:  #[linkme::distributed_slice]            │
//! │                         pub static COMPONENTS: [Entry] = [..]   │
//! │                               ↓                                 │
//! │  3. Scanner queries:    scan() / scan_providers() / scan_agents │
//! │                               ↓                                 │
//! │  4. Bootstrap wires:    container factories + registry entries  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a provider (in a provider crate)
//!
//! ```ignore
//! use agb_application::registry::{ProviderEntry, PROVIDERS};
//!
//! #[linkme::distributed_slice(PROVIDERS)]
//! static ECHO_PROVIDER: ProviderEntry = ProviderEntry {
//!     category: ProviderCategory::TextGeneration,
//!     name: "echo",
//!     description: "Deterministic echo text generation",
//!     factory: |config| Ok(Arc::new(EchoTextProvider::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a provider (in the infrastructure layer)
//!
//! ```ignore
//! use agb_application::registry::{resolve_provider, ProviderConfig};
//!
//! let config = ProviderConfig::new("echo");
//! let provider = resolve_provider(ProviderCategory::TextGeneration, &config)?;
//! ```

/// Agent registration entries
pub mod agents;
/// Component registration entries
pub mod components;
/// Provider registration entries
pub mod providers;

pub use agents::{list_agents, resolve_agent, AgentEntry, AGENTS};
pub use components::{ComponentEntry, ComponentFactory, COMPONENTS};
pub use providers::{
    list_providers, resolve_provider, ProviderConfig, ProviderEntry, PROVIDERS,
};
