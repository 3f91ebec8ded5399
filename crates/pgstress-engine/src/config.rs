//! Configuration for a workload session.

use crate::events::SessionEvent;
use pgstress_core::events::EventListeners;
use std::num::NonZeroU32;
use std::time::Duration;

/// Configuration for a workload session.
#[derive(Clone)]
pub struct SessionConfig {
    /// Cap on simultaneously in-flight operations.
    pub(crate) workers: usize,
    /// Target operations per second (per-slot pacing, see [`crate::Pacer`]).
    pub(crate) ops_per_second: NonZeroU32,
    /// Name of this workload instance.
    pub(crate) name: String,
    /// Event listeners.
    pub(crate) event_listeners: EventListeners<SessionEvent>,
}

impl SessionConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }
}

/// Builder for session configuration.
pub struct SessionConfigBuilder {
    workers: usize,
    ops_per_second: NonZeroU32,
    name: String,
    event_listeners: EventListeners<SessionEvent>,
}

impl SessionConfigBuilder {
    /// Creates a new builder with default values.
    ///
    /// Defaults:
    /// - workers: 1
    /// - ops_per_second: 10
    /// - name: `"workload"`
    pub fn new() -> Self {
        Self {
            workers: 1,
            ops_per_second: NonZeroU32::new(10).expect("10 is non-zero"),
            name: "workload".to_string(),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the cap on simultaneously in-flight operations.
    ///
    /// Default: 1
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the target rate in operations per second.
    ///
    /// The rate is applied per worker slot, not globally: each slot sleeps
    /// `1s / rate` after its operation before accepting new work. See
    /// [`crate::Pacer`] for the throughput this yields under saturation.
    ///
    /// Default: 10
    pub fn ops_per_second(mut self, rate: NonZeroU32) -> Self {
        self.ops_per_second = rate;
        self
    }

    /// Sets the name of this workload instance (used in events and logs).
    ///
    /// Default: "workload"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Registers a callback invoked each time an operation is dispatched.
    ///
    /// # Callback Signature
    /// `Fn(usize)` - Called with the number of operations in flight after
    /// this dispatch, between 1 and `workers` (inclusive).
    pub fn on_dispatch<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &SessionEvent| {
            if let SessionEvent::OperationDispatched { in_flight, .. } = event {
                f(*in_flight);
            }
        });
        self
    }

    /// Registers a callback invoked each time a dispatched operation runs to
    /// completion, whatever its outcome.
    ///
    /// # Callback Signature
    /// `Fn(Duration)` - Called with the time the operation spent executing,
    /// excluding the pacing delay.
    pub fn on_settled<F>(mut self, f: F) -> Self
    where
        F: Fn(Duration) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &SessionEvent| {
            if let SessionEvent::OperationSettled { elapsed, .. } = event {
                f(*elapsed);
            }
        });
        self
    }

    /// Registers a callback invoked once when the session observes
    /// cancellation and stops admitting operations.
    pub fn on_cancelled<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &SessionEvent| {
            if let SessionEvent::CancelRequested { .. } = event {
                f();
            }
        });
        self
    }

    /// Builds the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is zero; a session with no worker slots could
    /// never dispatch anything.
    pub fn build(self) -> SessionConfig {
        assert!(self.workers >= 1, "session workers must be at least 1");
        SessionConfig {
            workers: self.workers,
            ops_per_second: self.ops_per_second,
            name: self.name,
            event_listeners: self.event_listeners,
        }
    }
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
