//! # agentic-boot Domain Layer
//!
//! Core types and boundary contracts for the agentic-boot framework.
//! This crate has no knowledge of the container, the catalog, or any
//! transport - it defines the vocabulary the other layers speak.
//!
//! ## Contents
//!
//! - `error` - framework error taxonomy and `Result` alias
//! - `value_objects` - provider categories, component kinds, agent task types
//! - `ports` - traits implemented across layer boundaries (`Agent`,
//!   `ProviderInstance`, `BeanSource`)
//! - `events` - lifecycle event types published on the event bus

/// Framework error taxonomy
pub mod error;

/// Lifecycle event types
pub mod events;

/// Boundary contracts between layers
pub mod ports;

/// Value objects shared across layers
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Agent, BeanSource, ProviderInstance};
pub use value_objects::{ComponentKind, ProviderCategory, TaskRequest, TaskResult};
