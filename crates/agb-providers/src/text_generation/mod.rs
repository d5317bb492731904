//! Deterministic text generation

/// Echo provider
pub mod echo;

pub use echo::EchoTextProvider;
