//! Provider category set
//!
//! The registry accepts providers only under one of these predeclared
//! categories. Registration under any other name fails with
//! [`Error::UnknownCategory`](crate::error::Error::UnknownCategory).

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of provider categories
///
/// Categories are addressed by their kebab-case names in configuration
/// and string-based registration (`"text-generation"`, `"web-search"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCategory {
    /// LLM text generation backends
    TextGeneration,
    /// Infrastructure services
    Infrastructure,
    /// Object/blob storage backends
    Storage,
    /// Message broker integrations
    Messaging,
    /// Multi-agent orchestration backends
    Orchestration,
    /// Agent memory stores
    Memory,
    /// Work queue backends
    Queue,
    /// Tool integrations callable by agents
    Tool,
    /// Output evaluation backends
    Evaluation,
    /// Web search backends
    WebSearch,
    /// Browser-automation web testing backends
    WebTest,
    /// Database backends
    Database,
    /// Cache backends
    Cache,
    /// Email integrations
    Email,
    /// Notification channels
    Notification,
    /// Sandboxed code execution backends
    CodeExecution,
    /// Source-code-management service integrations
    Scm,
    /// Version-control-system integrations
    Vcs,
    /// Workflow engine integrations
    Workflow,
}

impl ProviderCategory {
    /// Every category, in declaration order
    pub const ALL: [ProviderCategory; 19] = [
        ProviderCategory::TextGeneration,
        ProviderCategory::Infrastructure,
        ProviderCategory::Storage,
        ProviderCategory::Messaging,
        ProviderCategory::Orchestration,
        ProviderCategory::Memory,
        ProviderCategory::Queue,
        ProviderCategory::Tool,
        ProviderCategory::Evaluation,
        ProviderCategory::WebSearch,
        ProviderCategory::WebTest,
        ProviderCategory::Database,
        ProviderCategory::Cache,
        ProviderCategory::Email,
        ProviderCategory::Notification,
        ProviderCategory::CodeExecution,
        ProviderCategory::Scm,
        ProviderCategory::Vcs,
        ProviderCategory::Workflow,
    ];

    /// Kebab-case name used in configuration and registration
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderCategory::TextGeneration => "text-generation",
            ProviderCategory::Infrastructure => "infrastructure",
            ProviderCategory::Storage => "storage",
            ProviderCategory::Messaging => "messaging",
            ProviderCategory::Orchestration => "orchestration",
            ProviderCategory::Memory => "memory",
            ProviderCategory::Queue => "queue",
            ProviderCategory::Tool => "tool",
            ProviderCategory::Evaluation => "evaluation",
            ProviderCategory::WebSearch => "web-search",
            ProviderCategory::WebTest => "web-test",
            ProviderCategory::Database => "database",
            ProviderCategory::Cache => "cache",
            ProviderCategory::Email => "email",
            ProviderCategory::Notification => "notification",
            ProviderCategory::CodeExecution => "code-execution",
            ProviderCategory::Scm => "scm",
            ProviderCategory::Vcs => "vcs",
            ProviderCategory::Workflow => "workflow",
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_category() {
        for category in ProviderCategory::ALL {
            let parsed: ProviderCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "blockchain".parse::<ProviderCategory>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory { ref category } if category == "blockchain"));
    }
}
