//! Echo text-generation provider
//!
//! Returns its prompt verbatim (optionally prefixed). Deterministic and
//! offline, which is exactly what tests and development want from a
//! text-generation backend.

use agb_domain::ports::ProviderInstance;

/// Text-generation provider that echoes the prompt
pub struct EchoTextProvider {
    prefix: Option<String>,
}

impl EchoTextProvider {
    /// Create an echo provider with no prefix
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create an echo provider that prepends `prefix` to every completion
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Produce a completion for the prompt
    pub fn complete(&self, prompt: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{prompt}"),
            None => prompt.to_string(),
        }
    }
}

impl Default for EchoTextProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderInstance for EchoTextProvider {
    fn provider_name(&self) -> &str {
        "echo"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agb_application::registry::{ProviderConfig, ProviderEntry, PROVIDERS};
use agb_domain::value_objects::ProviderCategory;

#[linkme::distributed_slice(PROVIDERS)]
static ECHO_TEXT_PROVIDER: ProviderEntry = ProviderEntry {
    category: ProviderCategory::TextGeneration,
    name: "echo",
    description: "Deterministic echo completion (offline, for tests and development)",
    factory: |config: &ProviderConfig| {
        let provider = match config.extra.get("prefix") {
            Some(prefix) => EchoTextProvider::with_prefix(prefix),
            None => EchoTextProvider::new(),
        };
        Ok(std::sync::Arc::new(provider))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_the_prompt() {
        let provider = EchoTextProvider::new();
        assert_eq!(provider.complete("hello"), "hello");
    }

    #[test]
    fn prefix_is_prepended() {
        let provider = EchoTextProvider::with_prefix("> ");
        assert_eq!(provider.complete("hello"), "> hello");
    }

    #[test]
    fn factory_reads_prefix_from_config() {
        let config = ProviderConfig::new("echo").with_extra("prefix", "# ");
        let instance = (ECHO_TEXT_PROVIDER.factory)(&config).unwrap();
        let provider = instance.downcast_arc::<EchoTextProvider>().ok().unwrap();
        assert_eq!(provider.complete("x"), "# x");
    }
}
