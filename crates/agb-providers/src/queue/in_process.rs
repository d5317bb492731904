//! In-process FIFO queue
//!
//! A bounded work queue for single-process deployments. Enqueueing past
//! capacity fails rather than growing without limit.

use std::collections::VecDeque;
use std::sync::Mutex;

use agb_domain::ports::ProviderInstance;

/// Default capacity when none is configured
const DEFAULT_CAPACITY: usize = 1024;

/// Bounded in-process FIFO queue of string payloads
pub struct InProcessQueue {
    items: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl InProcessQueue {
    /// Create a queue with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a queue holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Append an item; fails when the queue is full
    pub fn enqueue(&self, item: impl Into<String>) -> Result<(), String> {
        let mut items = self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if items.len() >= self.capacity {
            return Err(format!("queue full (capacity {})", self.capacity));
        }
        items.push_back(item.into());
        Ok(())
    }

    /// Remove and return the oldest item
    pub fn dequeue(&self) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InProcessQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderInstance for InProcessQueue {
    fn provider_name(&self) -> &str {
        "in-process"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agb_application::registry::{ProviderConfig, ProviderEntry, PROVIDERS};
use agb_domain::value_objects::ProviderCategory;

#[linkme::distributed_slice(PROVIDERS)]
static IN_PROCESS_QUEUE: ProviderEntry = ProviderEntry {
    category: ProviderCategory::Queue,
    name: "in-process",
    description: "Bounded in-process FIFO work queue",
    factory: |config: &ProviderConfig| {
        let capacity = match config.extra.get("capacity") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("invalid queue capacity '{raw}'"))?,
            None => DEFAULT_CAPACITY,
        };
        Ok(std::sync::Arc::new(InProcessQueue::with_capacity(capacity)))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let queue = InProcessQueue::new();
        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();
        assert_eq!(queue.dequeue().as_deref(), Some("a"));
        assert_eq!(queue.dequeue().as_deref(), Some("b"));
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn capacity_is_enforced() {
        let queue = InProcessQueue::with_capacity(1);
        queue.enqueue("a").unwrap();
        assert!(queue.enqueue("b").is_err());
        queue.dequeue();
        assert!(queue.enqueue("b").is_ok());
    }

    #[test]
    fn factory_rejects_bad_capacity() {
        let config = ProviderConfig::new("in-process").with_extra("capacity", "lots");
        assert!((IN_PROCESS_QUEUE.factory)(&config).is_err());
    }
}
