//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the agentic-boot framework
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No singleton or factory is registered for the requested bean type
    #[error("Bean not found: no registration for type {type_name}")]
    BeanNotFound {
        /// Fully qualified name of the requested type
        type_name: String,
    },

    /// Bean resolution re-entered a type already being constructed
    #[error("Circular dependency detected: {chain}")]
    CircularDependency {
        /// The resolution chain, e.g. `A -> B -> A`
        chain: String,
    },

    /// Container operation error (factory failure, downcast mismatch)
    #[error("Container error: {message}")]
    Container {
        /// Description of the container error
        message: String,
    },

    /// Provider category outside the fixed predeclared set
    #[error("Unknown provider category: {category}")]
    UnknownCategory {
        /// The category string that failed to parse
        category: String,
    },

    /// Provider registry operation error
    #[error("Registry error: {message}")]
    Registry {
        /// Description of the registry error
        message: String,
    },

    /// Event bus operation error
    #[error("Event bus error: {message}")]
    EventBus {
        /// Description of the event bus error
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a bean-not-found error
    pub fn bean_not_found<S: Into<String>>(type_name: S) -> Self {
        Self::BeanNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create a circular-dependency error from the resolution chain
    pub fn circular_dependency<S: Into<String>>(chain: S) -> Self {
        Self::CircularDependency {
            chain: chain.into(),
        }
    }

    /// Create a container error
    pub fn container<S: Into<String>>(message: S) -> Self {
        Self::Container {
            message: message.into(),
        }
    }

    /// Create an unknown-category error
    pub fn unknown_category<S: Into<String>>(category: S) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create a registry error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create an event bus error
    pub fn event_bus<S: Into<String>>(message: S) -> Self {
        Self::EventBus {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
