//! # agentic-boot Application Layer
//!
//! The compile-time catalog: components, providers, and agents register
//! themselves through `linkme` distributed slices, and the scanner exposes
//! the discovery operations the bootstrap routine walks at startup.
//!
//! This is the static replacement for classpath scanning - registration
//! happens at link time, discovery is a slice iteration, and an empty
//! slice is an empty scan result rather than an error.

/// Distributed-slice registries and entry types
pub mod registry;

/// Discovery operations over the registries
pub mod scanner;

pub use registry::{
    AgentEntry, ComponentEntry, ProviderConfig, ProviderEntry, AGENTS, COMPONENTS, PROVIDERS,
};
pub use scanner::{scan, scan_agents, scan_for_kind, scan_providers};
