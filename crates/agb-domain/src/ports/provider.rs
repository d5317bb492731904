//! Opaque provider instance contract
//!
//! The registry stores providers as trait objects keyed by
//! `(category, name)`. Consumers that need the concrete capability
//! downcast to the implementation type or to a capability trait they share
//! with the provider crate.

use downcast_rs::{impl_downcast, DowncastSync};

/// A registrable provider instance
///
/// Implementations live in provider crates; the registry treats them as
/// opaque beyond their name. `DowncastSync` lets a consumer recover the
/// concrete type from an `Arc<dyn ProviderInstance>` without the registry
/// knowing any category-specific trait.
pub trait ProviderInstance: DowncastSync {
    /// Name this instance registers under within its category
    fn provider_name(&self) -> &str;
}

impl_downcast!(sync ProviderInstance);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Fixed;

    impl ProviderInstance for Fixed {
        fn provider_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn downcast_recovers_concrete_type() {
        let provider: Arc<dyn ProviderInstance> = Arc::new(Fixed);
        assert_eq!(provider.provider_name(), "fixed");
        assert!(provider.downcast_arc::<Fixed>().is_ok());
    }
}
