//! Error extension utilities
//!
//! Context extension methods converting foreign errors into the domain
//! error type at infrastructure boundaries.
//!
//! ```ignore
//! use agb_infrastructure::error_ext::ErrorContext;
//!
//! let config: AppConfig = figment
//!     .extract()
//!     .config_context("Failed to extract configuration")?;
//! ```

use agb_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to foreign results
pub trait ErrorContext<T> {
    /// Convert the error into an internal domain error with context
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Like `context`, with lazily-built context
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Convert the error into a configuration error with context
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::internal(format!("{}: {err}", f())))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_context_keeps_source() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "locked",
        ));
        let err = result.config_context("reading settings").unwrap_err();
        assert!(err.to_string().contains("reading settings"));
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
