//! Discovery operations over the catalog
//!
//! The runtime face of the distributed-slice registries. Scanning is a
//! slice iteration: it cannot fail, repeated scans are cheap, and a build
//! with no registered entries yields empty results rather than errors.

use std::any::TypeId;
use std::collections::{BTreeMap, HashSet};

use agb_domain::value_objects::{ComponentKind, ProviderCategory};

use crate::registry::{AgentEntry, ComponentEntry, ProviderEntry, AGENTS, COMPONENTS, PROVIDERS};

/// All registered components, deduplicated by type
///
/// A type registered under more than one kind appears once, first entry
/// wins. Order otherwise follows link order, which is stable within a
/// build but not meaningful - callers must not depend on it.
pub fn scan() -> Vec<&'static ComponentEntry> {
    let mut seen: HashSet<TypeId> = HashSet::new();
    COMPONENTS
        .iter()
        .filter(|entry| seen.insert((entry.type_id)()))
        .collect()
}

/// Registered components of one kind
pub fn scan_for_kind(kind: ComponentKind) -> Vec<&'static ComponentEntry> {
    COMPONENTS.iter().filter(|e| e.kind == kind).collect()
}

/// Registered providers grouped by category
///
/// Every category in the fixed set is present in the result, mapped to an
/// empty list when nothing registered under it.
pub fn scan_providers() -> BTreeMap<ProviderCategory, Vec<&'static ProviderEntry>> {
    let mut grouped: BTreeMap<ProviderCategory, Vec<&'static ProviderEntry>> =
        ProviderCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for entry in PROVIDERS {
        grouped
            .entry(entry.category)
            .or_default()
            .push(entry);
    }
    grouped
}

/// All registered agent entries
pub fn scan_agents() -> Vec<&'static AgentEntry> {
    AGENTS.iter().collect()
}
