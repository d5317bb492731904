//! # agentic-boot
//!
//! A lightweight application framework for agent-oriented services:
//! a type-keyed dependency-injection container, a compile-time
//! component/provider/agent catalog, a category-scoped provider registry,
//! a type-keyed pub/sub event bus, and HTTP wiring for discovered
//! controllers.
//!
//! ## Example
//!
//! ```ignore
//! use agb::infrastructure::bootstrap::{ignite, AppDescriptor};
//!
//! # async fn demo() -> agb::domain::Result<()> {
//! let ctx = ignite(&AppDescriptor::new("my-service"))?;
//! let agent = ctx.registry().get_agent("echo").unwrap();
//! agb::server::serve(ctx).await
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - core types, ports, and errors
//! - `application` - the compile-time catalog and scanner
//! - `infrastructure` - container, registry, event bus, config, bootstrap
//! - `providers` - built-in in-process providers and agents
//! - `server` - Rocket wiring for discovered controllers

/// Domain layer - core types, ports, and errors
pub mod domain {
    pub use agb_domain::*;
}

/// Application layer - catalog and scanner
pub mod application {
    pub use agb_application::*;
}

/// Infrastructure layer - container, registry, event bus, config, bootstrap
pub mod infrastructure {
    pub use agb_infrastructure::*;
}

/// Built-in providers and agents
pub mod providers {
    pub use agb_providers::*;
}

/// HTTP layer - controller contract and Rocket assembly
pub mod server {
    pub use agb_server::*;
}
