//! Event delivery for pgstress components.
//!
//! The gate and the session engine report what they do through typed events
//! rather than log lines: callers register listeners at configuration time
//! and the component emits to them synchronously. A panicking listener is
//! isolated so it cannot take the admission loop down with it.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// An event emitted by a pgstress component.
pub trait WorkloadEvent: Send + Sync + fmt::Debug {
    /// Dotted event identifier, e.g. "gate.slot_acquired".
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn timestamp(&self) -> Instant;

    /// Name of the workload instance the event belongs to.
    fn workload_name(&self) -> &str;
}

/// A receiver for workload events.
///
/// Any `Fn(&E)` closure is already a listener; implement the trait by hand
/// only when the receiver carries state of its own.
pub trait EventListener<E: WorkloadEvent>: Send + Sync {
    /// Called once per emitted event.
    fn on_event(&self, event: &E);
}

impl<E, F> EventListener<E> for F
where
    E: WorkloadEvent,
    F: Fn(&E) + Send + Sync,
{
    fn on_event(&self, event: &E) {
        self(event)
    }
}

/// The listeners registered on one component, invoked in registration order.
#[derive(Clone)]
pub struct EventListeners<E: WorkloadEvent> {
    listeners: Vec<Arc<dyn EventListener<E>>>,
}

impl<E: WorkloadEvent> EventListeners<E> {
    /// Creates an empty set of listeners.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener.
    pub fn add<L>(&mut self, listener: L)
    where
        L: EventListener<E> + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Delivers `event` to every listener.
    ///
    /// A panic in one listener is caught so the listeners after it still see
    /// the event.
    pub fn emit(&self, event: &E) {
        for listener in &self.listeners {
            let delivery = std::panic::AssertUnwindSafe(|| listener.on_event(event));
            let _ = std::panic::catch_unwind(delivery);
        }
    }
}
