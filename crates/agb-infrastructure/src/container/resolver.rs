//! Per-call resolution with cycle detection
//!
//! A [`BeanResolver`] lives for exactly one top-level `get_bean` call. The
//! in-progress path is owned by the resolver, so cycle detection needs no
//! shared container state and a failed resolution leaves the container
//! untouched apart from any dependencies that completed first.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::sync::Arc;

use agb_domain::error::{Error, Result};
use agb_domain::ports::BeanSource;

use super::context::AgenticContext;

/// One entry on the in-progress resolution path
#[derive(Clone)]
struct PathEntry {
    type_id: TypeId,
    type_name: String,
}

/// Resolution state for a single `get_bean` call
///
/// Handed to factories as `&dyn BeanSource`; nested `resolve` calls share
/// this resolver and therefore this path. Not `Sync` - a resolution runs
/// on the calling thread from start to finish.
pub struct BeanResolver<'a> {
    context: &'a AgenticContext,
    path: RefCell<Vec<PathEntry>>,
}

impl<'a> BeanResolver<'a> {
    /// Start a resolution against the given container
    pub fn new(context: &'a AgenticContext) -> Self {
        Self {
            context,
            path: RefCell::new(Vec::new()),
        }
    }

    /// Render the cycle chain `A -> B -> A` ending at the re-entered type
    fn cycle_chain(&self, type_name: &str) -> String {
        let mut names: Vec<String> = self
            .path
            .borrow()
            .iter()
            .map(|entry| entry.type_name.clone())
            .collect();
        names.push(type_name.to_string());
        names.join(" -> ")
    }
}

impl BeanSource for BeanResolver<'_> {
    fn get_any(&self, type_id: TypeId, type_name: &str) -> Result<Arc<dyn Any + Send + Sync>> {
        if let Some(existing) = self.context.cached(type_id) {
            return Ok(existing);
        }

        if self.path.borrow().iter().any(|e| e.type_id == type_id) {
            return Err(Error::circular_dependency(self.cycle_chain(type_name)));
        }

        let Some(entry) = self.context.factory(type_id) else {
            return Err(Error::bean_not_found(type_name));
        };

        self.path.borrow_mut().push(PathEntry {
            type_id,
            type_name: entry.type_name.to_string(),
        });
        let produced = (entry.factory)(self);
        // Popped on success and failure alike; a later retry must see a
        // clean path.
        self.path.borrow_mut().pop();

        Ok(self.context.cache(type_id, produced?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Repo;

    struct Service {
        repo: Arc<Repo>,
    }

    #[test]
    fn constructor_injection_shares_singletons() {
        let container = AgenticContext::new();
        container.register_factory::<Repo, _>(|_| Ok(Arc::new(Repo)));
        container.register_factory::<Service, _>(|beans| {
            Ok(Arc::new(Service {
                repo: beans.resolve::<Repo>()?,
            }))
        });

        let service = container.get_bean::<Service>().unwrap();
        let repo = container.get_bean::<Repo>().unwrap();
        assert!(Arc::ptr_eq(&service.repo, &repo));
    }

    #[test]
    fn repeated_resolution_returns_same_instance() {
        let container = AgenticContext::new();
        container.register_factory::<Repo, _>(|_| Ok(Arc::new(Repo)));
        let first = container.get_bean::<Repo>().unwrap();
        let second = container.get_bean::<Repo>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[derive(Debug)]
    struct Chicken {
        _egg: Arc<Egg>,
    }

    #[derive(Debug)]
    struct Egg {
        _chicken: Arc<Chicken>,
    }

    #[test]
    fn cycle_reports_full_chain() {
        let container = AgenticContext::new();
        container.register_factory::<Chicken, _>(|beans| {
            Ok(Arc::new(Chicken {
                _egg: beans.resolve::<Egg>()?,
            }))
        });
        container.register_factory::<Egg, _>(|beans| {
            Ok(Arc::new(Egg {
                _chicken: beans.resolve::<Chicken>()?,
            }))
        });

        let err = container.get_bean::<Chicken>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Circular dependency"));
        assert!(message.contains("Chicken"));
        assert!(message.contains("Egg"));
        // The chain ends where it started.
        let chicken_mentions = message.matches("Chicken").count();
        assert!(chicken_mentions >= 2, "chain should repeat the entry type: {message}");
    }

    #[test]
    fn factory_failure_does_not_poison_later_resolution() {
        use std::sync::atomic::{AtomicBool, Ordering};
        static FAIL_FIRST: AtomicBool = AtomicBool::new(true);

        let container = AgenticContext::new();
        container.register_factory::<Repo, _>(|_| {
            if FAIL_FIRST.swap(false, Ordering::SeqCst) {
                Err(agb_domain::error::Error::container("first attempt fails"))
            } else {
                Ok(Arc::new(Repo))
            }
        });

        assert!(container.get_bean::<Repo>().is_err());
        assert!(container.get_bean::<Repo>().is_ok());
    }
}
