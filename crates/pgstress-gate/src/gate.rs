//! Admission gate implementation.

use crate::config::GateConfig;
use crate::error::AcquireError;
use crate::events::GateEvent;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::CancellationToken;

#[cfg(feature = "metrics")]
use metrics::{counter, describe_counter, describe_gauge, gauge};
#[cfg(feature = "metrics")]
use std::sync::Once;

#[cfg(feature = "metrics")]
static METRICS_INIT: Once = Once::new();

/// Bounded-admission gate that caps the number of in-flight operations.
///
/// The gate hands out [`SlotPermit`]s up to its configured capacity.
/// Acquisition waits for a free slot; release happens when the permit is
/// dropped and never blocks, so a slot can be handed back from any task at
/// any time, including after the session has been cancelled.
#[derive(Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    config: Arc<GateConfig>,
}

impl AdmissionGate {
    /// Creates a new gate from the given configuration.
    pub(crate) fn new(config: GateConfig) -> Self {
        #[cfg(feature = "metrics")]
        METRICS_INIT.call_once(|| {
            describe_counter!(
                "gate_slots_acquired_total",
                "Total number of slots handed out by the gate"
            );
            describe_counter!(
                "gate_acquires_cancelled_total",
                "Total number of waiting acquisitions abandoned due to cancellation"
            );
            describe_gauge!("gate_in_flight", "Number of slots currently in use");
        });

        let semaphore = Arc::new(Semaphore::new(config.capacity));
        Self {
            semaphore,
            config: Arc::new(config),
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of slots currently in use.
    pub fn in_flight(&self) -> usize {
        self.config.capacity - self.semaphore.available_permits()
    }

    /// Waits until a slot is free and acquires it.
    ///
    /// Returns [`AcquireError::Closed`] only if the underlying semaphore was
    /// closed, which does not happen during normal operation.
    pub async fn acquire(&self) -> Result<SlotPermit, AcquireError> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| AcquireError::Closed)?;
        Ok(self.admit(permit))
    }

    /// Waits until a slot is free or the session is cancelled, whichever
    /// happens first.
    ///
    /// There is no priority between the two outcomes: if a slot frees up at
    /// the same moment cancellation fires, either may win. Cancellation
    /// returns [`AcquireError::Cancelled`] and emits
    /// [`GateEvent::AcquireCancelled`].
    pub async fn acquire_with(
        &self,
        shutdown: &CancellationToken,
    ) -> Result<SlotPermit, AcquireError> {
        tokio::select! {
            permit = Arc::clone(&self.semaphore).acquire_owned() => {
                let permit = permit.map_err(|_| AcquireError::Closed)?;
                Ok(self.admit(permit))
            }
            _ = shutdown.cancelled() => {
                self.config.event_listeners.emit(&GateEvent::AcquireCancelled {
                    workload_name: self.config.name.clone(),
                    timestamp: Instant::now(),
                });

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    workload = %self.config.name,
                    "admission abandoned: session cancelled"
                );

                #[cfg(feature = "metrics")]
                counter!("gate_acquires_cancelled_total", "workload" => self.config.name.clone())
                    .increment(1);

                Err(AcquireError::Cancelled)
            }
        }
    }

    fn admit(&self, permit: OwnedSemaphorePermit) -> SlotPermit {
        let in_flight = self.in_flight();

        self.config.event_listeners.emit(&GateEvent::SlotAcquired {
            workload_name: self.config.name.clone(),
            timestamp: Instant::now(),
            in_flight,
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(
            workload = %self.config.name,
            in_flight,
            "slot acquired"
        );

        #[cfg(feature = "metrics")]
        {
            counter!("gate_slots_acquired_total", "workload" => self.config.name.clone())
                .increment(1);
            gauge!("gate_in_flight", "workload" => self.config.name.clone())
                .set(in_flight as f64);
        }

        SlotPermit {
            _permit: permit,
            acquired_at: Instant::now(),
            config: Arc::clone(&self.config),
        }
    }
}

/// An occupancy token for one admitted, not-yet-completed operation.
///
/// Dropping the permit hands the slot back to the gate. The release path is
/// synchronous and never blocks, which keeps it safe to run from inside a
/// detached task after the session has already been cancelled.
pub struct SlotPermit {
    _permit: OwnedSemaphorePermit,
    acquired_at: Instant,
    config: Arc<GateConfig>,
}

impl Drop for SlotPermit {
    fn drop(&mut self) {
        let held = self.acquired_at.elapsed();

        self.config.event_listeners.emit(&GateEvent::SlotReleased {
            workload_name: self.config.name.clone(),
            timestamp: Instant::now(),
            held,
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(
            workload = %self.config.name,
            held_ms = held.as_millis() as u64,
            "slot released"
        );

        #[cfg(feature = "metrics")]
        gauge!("gate_in_flight", "workload" => self.config.name.clone()).decrement(1.0);
    }
}
