//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. Ports
//! follow the Dependency Inversion Principle: the domain defines the
//! interface, infrastructure and provider crates implement it.
//!
//! - **agent** - the capability surface discovered and registered by name
//! - **provider** - the opaque instance stored in the provider registry
//! - **container** - the type-erased bean lookup factories resolve through

/// Agent capability surface
pub mod agent;
/// Type-erased bean lookup
pub mod container;
/// Opaque provider instance contract
pub mod provider;

pub use agent::Agent;
pub use container::BeanSource;
pub use provider::ProviderInstance;
