//! Component classification
//!
//! The compile-time catalog tags every registered component with its kind,
//! the static equivalent of the original marker-annotation surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a registered component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Plain managed component
    Component,
    /// Business service
    Service,
    /// HTTP controller handed to the server layer at bootstrap
    RestController,
}

impl ComponentKind {
    /// Every kind, in declaration order
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Component,
        ComponentKind::Service,
        ComponentKind::RestController,
    ];
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Component => "component",
            ComponentKind::Service => "service",
            ComponentKind::RestController => "rest-controller",
        };
        f.write_str(name)
    }
}
