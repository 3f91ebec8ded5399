//! Configuration for the admission gate.

use crate::events::GateEvent;
use crate::gate::AdmissionGate;
use pgstress_core::events::EventListeners;
use std::time::Duration;

/// Configuration for an admission gate.
#[derive(Clone)]
pub struct GateConfig {
    /// Maximum number of slots that may be held at once.
    pub(crate) capacity: usize,
    /// Name of the workload instance this gate belongs to.
    pub(crate) name: String,
    /// Event listeners.
    pub(crate) event_listeners: EventListeners<GateEvent>,
}

impl GateConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GateConfigBuilder {
        GateConfigBuilder::new()
    }
}

/// Builder for gate configuration.
pub struct GateConfigBuilder {
    capacity: usize,
    name: String,
    event_listeners: EventListeners<GateEvent>,
}

impl GateConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            capacity: 1,
            name: "gate".to_string(),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the number of slots, i.e. the cap on in-flight operations.
    ///
    /// Default: 1
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the name of the workload instance this gate belongs to (used in
    /// events and telemetry labels).
    ///
    /// Default: "gate"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Registers a callback invoked each time a slot is acquired.
    ///
    /// # Callback Signature
    /// `Fn(usize)` - Called with the number of slots in use after this
    /// acquisition, between 1 and `capacity` (inclusive).
    pub fn on_slot_acquired<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &GateEvent| {
            if let GateEvent::SlotAcquired { in_flight, .. } = event {
                f(*in_flight);
            }
        });
        self
    }

    /// Registers a callback invoked each time a slot is handed back.
    ///
    /// # Callback Signature
    /// `Fn(Duration)` - Called with the time the slot was held, from
    /// acquisition until release.
    pub fn on_slot_released<F>(mut self, f: F) -> Self
    where
        F: Fn(Duration) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &GateEvent| {
            if let GateEvent::SlotReleased { held, .. } = event {
                f(*held);
            }
        });
        self
    }

    /// Registers a callback invoked when a waiting acquisition is abandoned
    /// because the session was cancelled.
    pub fn on_acquire_cancelled<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &GateEvent| {
            if let GateEvent::AcquireCancelled { .. } = event {
                f();
            }
        });
        self
    }

    /// Builds the configuration and returns an [`AdmissionGate`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A gate with no slots could never admit
    /// an operation and the session loop would hang on its first admission.
    pub fn build(self) -> AdmissionGate {
        assert!(self.capacity >= 1, "gate capacity must be at least 1");
        AdmissionGate::new(GateConfig {
            capacity: self.capacity,
            name: self.name,
            event_listeners: self.event_listeners,
        })
    }
}

impl Default for GateConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
