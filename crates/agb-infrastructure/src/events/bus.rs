//! Event bus
//!
//! In-process pub/sub keyed by event type. Any `'static + Send + Sync`
//! value is an event. Synchronous listeners run inline on the publishing
//! thread in subscription order; asynchronous listeners are spawned on the
//! Tokio runtime, gated by a semaphore bounding how many run at once.
//!
//! Listener failures are isolated: a panicking sync listener or a failing
//! async listener is logged and never reaches the publisher or the other
//! listeners.

use std::any::{Any, TypeId};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tracing::{error, warn};

use crate::constants::DEFAULT_EVENT_DISPATCH_CONCURRENCY;

/// Opaque handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type AnyEvent = dyn Any + Send + Sync;

enum ListenerKind {
    Sync(Box<dyn Fn(&AnyEvent) + Send + Sync>),
    Async(Box<dyn Fn(Arc<AnyEvent>) -> BoxFuture<'static, ()> + Send + Sync>),
}

struct ListenerEntry {
    id: SubscriptionId,
    kind: ListenerKind,
}

/// Type-keyed publish/subscribe bus
///
/// Listener lists are copy-on-write: `publish` snapshots the list for an
/// event type and iterates without holding any lock, so subscribe and
/// publish never contend across event types, and a subscriber added during
/// a publish is not guaranteed to see that publish's event.
pub struct EventBus {
    listeners: DashMap<TypeId, Arc<Vec<Arc<ListenerEntry>>>>,
    next_id: AtomicU64,
    closed: AtomicBool,
    runtime: Option<Handle>,
    dispatch_permits: Arc<Semaphore>,
}

impl EventBus {
    /// Create a bus with the default async dispatch concurrency
    pub fn new() -> Self {
        Self::with_dispatch_concurrency(DEFAULT_EVENT_DISPATCH_CONCURRENCY)
    }

    /// Create a bus allowing at most `concurrency` async listeners to run
    /// at once
    ///
    /// The Tokio runtime handle is captured here when one is available;
    /// async subscriptions on a bus created outside a runtime are dropped
    /// at dispatch time with an error log.
    pub fn with_dispatch_concurrency(concurrency: usize) -> Self {
        Self {
            listeners: DashMap::new(),
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
            runtime: Handle::try_current().ok(),
            dispatch_permits: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    fn push_entry(&self, type_id: TypeId, kind: ListenerKind) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut slot = self
            .listeners
            .entry(type_id)
            .or_insert_with(|| Arc::new(Vec::new()));
        let mut list: Vec<Arc<ListenerEntry>> = slot.iter().cloned().collect();
        list.push(Arc::new(ListenerEntry { id, kind }));
        *slot = Arc::new(list);
        id
    }

    /// Subscribe a synchronous listener for events of type `E`
    ///
    /// Invoked inline during `publish`, in subscription order.
    pub fn subscribe<E, F>(&self, listener: F) -> SubscriptionId
    where
        E: Any + Send + Sync,
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.push_entry(
            TypeId::of::<E>(),
            ListenerKind::Sync(Box::new(move |any| {
                if let Some(event) = any.downcast_ref::<E>() {
                    listener(event);
                }
            })),
        )
    }

    /// Subscribe an asynchronous listener for events of type `E`
    ///
    /// Each delivery is spawned on the runtime; the publish call never
    /// waits for it. Delivery order relative to other listeners is
    /// unspecified.
    pub fn subscribe_async<E, F, Fut>(&self, listener: F) -> SubscriptionId
    where
        E: Any + Send + Sync,
        F: Fn(Arc<E>) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.push_entry(
            TypeId::of::<E>(),
            ListenerKind::Async(Box::new(move |any: Arc<AnyEvent>| {
                match any.downcast::<E>() {
                    Ok(event) => listener(event).boxed(),
                    Err(_) => futures::future::ready(()).boxed(),
                }
            })),
        )
    }

    /// Publish an event to every listener subscribed to its type
    ///
    /// No listeners is a no-op. Publishing on a closed bus is a no-op
    /// with a warning.
    pub fn publish<E: Any + Send + Sync>(&self, event: E) {
        if self.closed.load(Ordering::Acquire) {
            warn!("Event published after bus close; dropping");
            return;
        }

        let Some(list) = self
            .listeners
            .get(&TypeId::of::<E>())
            .map(|slot| Arc::clone(&slot))
        else {
            return;
        };

        let shared: Arc<E> = Arc::new(event);
        for entry in list.iter() {
            match &entry.kind {
                ListenerKind::Sync(handler) => {
                    let event_ref: &AnyEvent = &*shared;
                    if catch_unwind(AssertUnwindSafe(|| handler(event_ref))).is_err() {
                        error!(
                            event_type = std::any::type_name::<E>(),
                            "Event listener panicked; continuing with remaining listeners"
                        );
                    }
                }
                ListenerKind::Async(handler) => {
                    let any_event: Arc<AnyEvent> = shared.clone();
                    let future = handler(any_event);
                    let Some(handle) = &self.runtime else {
                        error!(
                            event_type = std::any::type_name::<E>(),
                            "Async listener dropped: event bus was created outside a Tokio runtime"
                        );
                        continue;
                    };
                    let permits = Arc::clone(&self.dispatch_permits);
                    handle.spawn(async move {
                        let _permit = permits.acquire_owned().await.ok();
                        if AssertUnwindSafe(future).catch_unwind().await.is_err() {
                            error!("Async event listener panicked");
                        }
                    });
                }
            }
        }
    }

    /// Remove one subscription for events of type `E`
    ///
    /// Returns whether a listener was removed; an unknown id is a no-op.
    pub fn unsubscribe<E: Any + Send + Sync>(&self, id: SubscriptionId) -> bool {
        let Some(mut slot) = self.listeners.get_mut(&TypeId::of::<E>()) else {
            return false;
        };
        if !slot.iter().any(|entry| entry.id == id) {
            return false;
        }
        let list: Vec<Arc<ListenerEntry>> =
            slot.iter().filter(|entry| entry.id != id).cloned().collect();
        *slot = Arc::new(list);
        true
    }

    /// Remove every subscription for events of type `E`
    pub fn unsubscribe_all<E: Any + Send + Sync>(&self) {
        self.listeners.remove(&TypeId::of::<E>());
    }

    /// Number of listeners subscribed for events of type `E`
    pub fn listener_count<E: Any + Send + Sync>(&self) -> usize {
        self.listeners
            .get(&TypeId::of::<E>())
            .map(|slot| slot.len())
            .unwrap_or(0)
    }

    /// Total listeners across all event types
    pub fn total_listener_count(&self) -> usize {
        self.listeners.iter().map(|slot| slot.len()).sum()
    }

    /// Clear all registrations and stop accepting publishes
    ///
    /// In-flight async listeners are not drained; they finish on the
    /// runtime whenever they finish.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.listeners.clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct Ping(u32);

    #[test]
    fn sync_listeners_run_in_subscription_order() {
        let bus = EventBus::new();
        let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        bus.subscribe::<Ping, _>(move |_| first.lock().unwrap().push("first"));
        let second = Arc::clone(&seen);
        bus.subscribe::<Ping, _>(move |_| second.lock().unwrap().push("second"));
        let third = Arc::clone(&seen);
        bus.subscribe::<Ping, _>(move |_| third.lock().unwrap().push("third"));

        bus.publish(Ping(1));
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn panicking_listener_does_not_starve_the_rest() {
        let bus = EventBus::new();
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe::<Ping, _>(|_| panic!("listener bug"));
        let tail = Arc::clone(&seen);
        bus.subscribe::<Ping, _>(move |event| tail.lock().unwrap().push(event.0));

        bus.publish(Ping(7));
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let bus = EventBus::new();
        let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        let id = bus.subscribe::<Ping, _>(move |_| first.lock().unwrap().push("removed"));
        let second = Arc::clone(&seen);
        bus.subscribe::<Ping, _>(move |_| second.lock().unwrap().push("kept"));

        assert!(bus.unsubscribe::<Ping>(id));
        // Unknown id is a no-op, not an error.
        assert!(!bus.unsubscribe::<Ping>(id));

        bus.publish(Ping(1));
        assert_eq!(*seen.lock().unwrap(), vec!["kept"]);
        assert_eq!(bus.listener_count::<Ping>(), 1);
    }

    #[test]
    fn close_zeroes_listener_counts() {
        let bus = EventBus::new();
        bus.subscribe::<Ping, _>(|_| {});
        bus.subscribe::<String, _>(|_| {});
        assert_eq!(bus.total_listener_count(), 2);

        bus.close();
        assert_eq!(bus.listener_count::<Ping>(), 0);
        assert_eq!(bus.listener_count::<String>(), 0);
        assert_eq!(bus.total_listener_count(), 0);

        // Publishing after close is a warned no-op.
        bus.publish(Ping(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn async_listener_is_fire_and_forget() {
        let bus = EventBus::new();
        let gate = Arc::new(tokio::sync::Notify::new());
        let (done_tx, done_rx) = tokio::sync::oneshot::channel::<u32>();

        let listener_gate = Arc::clone(&gate);
        let done_tx = Mutex::new(Some(done_tx));
        bus.subscribe_async::<Ping, _, _>(move |event| {
            let gate = Arc::clone(&listener_gate);
            let tx = done_tx.lock().unwrap().take();
            async move {
                // Held open until the test releases the gate, proving the
                // publish call did not wait for this listener.
                gate.notified().await;
                if let Some(tx) = tx {
                    let _ = tx.send(event.0);
                }
            }
        });

        bus.publish(Ping(42));
        // publish returned while the listener is still parked on the gate
        gate.notify_one();
        let value = done_rx.await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn async_listener_panic_is_contained() {
        let bus = EventBus::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        bus.subscribe_async::<Ping, _, _>(|_| async { panic!("async listener bug") });
        let tx = Mutex::new(Some(tx));
        bus.subscribe_async::<Ping, _, _>(move |_| {
            let tx = tx.lock().unwrap().take();
            async move {
                if let Some(tx) = tx {
                    let _ = tx.send(());
                }
            }
        });

        bus.publish(Ping(1));
        rx.await.unwrap();
    }
}
