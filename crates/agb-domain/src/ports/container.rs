//! Type-erased bean lookup
//!
//! Component factories declare their dependencies by resolving them through
//! a [`BeanSource`] instead of reaching into a shared container. The
//! concrete implementation (the infrastructure `BeanResolver`) carries the
//! in-progress resolution path, so circular dependencies are detected
//! per-call rather than through container-global state.

use crate::error::{Error, Result};
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Type-erased bean lookup used inside component factories
///
/// Object-safe on purpose: catalog entries hold plain `fn` pointers taking
/// `&dyn BeanSource`. The typed convenience lives on the trait object.
pub trait BeanSource {
    /// Resolve the bean registered under `type_id`
    ///
    /// `type_name` is carried only for diagnostics (missing-bean and
    /// cycle messages).
    fn get_any(&self, type_id: TypeId, type_name: &str) -> Result<Arc<dyn Any + Send + Sync>>;
}

impl<'a> (dyn BeanSource + 'a) {
    /// Resolve a bean by type
    pub fn resolve<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        let type_name = std::any::type_name::<T>();
        let any = self.get_any(TypeId::of::<T>(), type_name)?;
        any.downcast::<T>().map_err(|_| {
            Error::container(format!(
                "registered bean does not have the requested type {type_name}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleBean(Arc<String>);

    impl BeanSource for SingleBean {
        fn get_any(
            &self,
            type_id: TypeId,
            type_name: &str,
        ) -> Result<Arc<dyn Any + Send + Sync>> {
            if type_id == TypeId::of::<String>() {
                Ok(self.0.clone())
            } else {
                Err(Error::bean_not_found(type_name))
            }
        }
    }

    #[test]
    fn typed_resolve_downcasts() {
        let source = SingleBean(Arc::new("hello".to_string()));
        let bean = (&source as &dyn BeanSource).resolve::<String>().unwrap();
        assert_eq!(*bean, "hello");
    }

    #[test]
    fn missing_bean_is_reported() {
        let source = SingleBean(Arc::new(String::new()));
        let err = (&source as &dyn BeanSource).resolve::<u32>().unwrap_err();
        assert!(matches!(err, Error::BeanNotFound { .. }));
    }
}
