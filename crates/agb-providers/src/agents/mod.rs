//! Built-in agents

/// Echo agent
pub mod echo;

pub use echo::EchoAgent;
