//! # agentic-boot HTTP Layer
//!
//! Mounts discovered REST controllers and the built-in health/status
//! endpoints on a Rocket instance bound from [`ServerConfig`]
//! (`agb_infrastructure::config::ServerConfig`).
//!
//! The container's only obligation to this layer is handing over resolved
//! controller instances; everything HTTP-shaped lives here.

/// Rocket assembly from an application context
pub mod builder;
/// Controller contract and registration
pub mod controller;
/// Built-in health endpoint
pub mod handlers;
/// High-level entry point: configure, ignite, serve
pub mod run;
/// Built-in status controller
pub mod status;

pub use builder::{build_rocket, serve};
pub use controller::{scan_controllers, ControllerEntry, RestController, CONTROLLERS};
pub use run::run;
