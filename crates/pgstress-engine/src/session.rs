//! Session lifecycle and the admission/dispatch loop.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::events::SessionEvent;
use crate::pacing::Pacer;
use crate::workload::Workload;
use pgstress_gate::{AdmissionGate, GateConfig};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

#[cfg(feature = "metrics")]
use metrics::{counter, describe_counter};
#[cfg(feature = "metrics")]
use std::sync::Once;

#[cfg(feature = "metrics")]
static METRICS_INIT: Once = Once::new();

/// One run of a stress workload.
///
/// A session owns its collaborators for the duration of a single run:
/// prepare fixtures, admit and dispatch operations at a bounded rate and
/// concurrency until cancelled, then tear the fixtures down. Construct a
/// fresh session per run; nothing is shared between runs.
pub struct Session<W> {
    config: SessionConfig,
    workload: Arc<W>,
    gate: AdmissionGate,
    pacer: Pacer,
}

impl<W: Workload> Session<W> {
    /// Creates a session over the given workload.
    pub fn new(config: SessionConfig, workload: W) -> Self {
        #[cfg(feature = "metrics")]
        METRICS_INIT.call_once(|| {
            describe_counter!(
                "session_operations_dispatched_total",
                "Total number of operations admitted and handed to worker tasks"
            );
            describe_counter!(
                "session_operations_settled_total",
                "Total number of dispatched operations that ran to completion"
            );
        });

        let gate = GateConfig::builder()
            .capacity(config.workers)
            .name(config.name.clone())
            .build();
        let pacer = Pacer::per_operation(config.ops_per_second);

        Self {
            config,
            workload: Arc::new(workload),
            gate,
            pacer,
        }
    }

    /// Returns the admission gate, mainly so callers can sample
    /// [`AdmissionGate::in_flight`] while the session runs.
    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }

    /// Runs the session until the token is cancelled.
    ///
    /// The sequence is: prepare fixtures (a failure here is returned
    /// immediately and the loop is never entered), drive the admission loop
    /// until cancellation, then remove fixtures (a failure here is logged
    /// and swallowed). Cancellation is normal termination: a session that
    /// reached the loop always returns `Ok(())`.
    ///
    /// Cancellation stops *admission* only. Operations already dispatched
    /// keep running as detached tasks and may race against teardown; the
    /// workload's fixtures must tolerate being removed underneath them.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<(), SessionError> {
        let started = Instant::now();
        self.workload
            .prepare()
            .await
            .map_err(SessionError::Prepare)?;

        self.emit(SessionEvent::FixturePrepared {
            workload_name: self.config.name.clone(),
            timestamp: Instant::now(),
            elapsed: started.elapsed(),
        });

        #[cfg(feature = "tracing")]
        tracing::info!(
            workload = %self.config.name,
            workers = self.config.workers,
            ops_per_second = self.config.ops_per_second.get(),
            "fixtures ready, starting admission loop"
        );

        self.drive(&shutdown).await;

        match self.workload.cleanup().await {
            Ok(()) => self.emit(SessionEvent::FixtureRemoved {
                workload_name: self.config.name.clone(),
                timestamp: Instant::now(),
            }),
            Err(err) => {
                // The session is already over; a failed teardown must not
                // mask its primary result.
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    workload = %self.config.name,
                    error = %err,
                    "fixture teardown failed"
                );

                self.emit(SessionEvent::CleanupFailed {
                    workload_name: self.config.name.clone(),
                    timestamp: Instant::now(),
                    message: err.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Admits and dispatches operations until cancellation.
    async fn drive(&self, shutdown: &CancellationToken) {
        loop {
            // Checked at the top of every admission attempt so that an
            // already-cancelled session admits nothing, not even when a slot
            // happens to be free.
            if shutdown.is_cancelled() {
                break;
            }

            let permit = match self.gate.acquire_with(shutdown).await {
                Ok(permit) => permit,
                Err(_) => break,
            };

            self.emit(SessionEvent::OperationDispatched {
                workload_name: self.config.name.clone(),
                timestamp: Instant::now(),
                in_flight: self.gate.in_flight(),
            });

            #[cfg(feature = "metrics")]
            counter!(
                "session_operations_dispatched_total",
                "workload" => self.config.name.clone()
            )
            .increment(1);

            let workload = Arc::clone(&self.workload);
            let listeners = self.config.event_listeners.clone();
            let name = self.config.name.clone();
            let delay = self.pacer.delay();

            tokio::spawn(async move {
                let dispatched = Instant::now();

                // Operations exist to generate pressure; an individual
                // failure carries no signal and is discarded here.
                let _ = workload.exercise().await;

                listeners.emit(&SessionEvent::OperationSettled {
                    workload_name: name.clone(),
                    timestamp: Instant::now(),
                    elapsed: dispatched.elapsed(),
                });

                #[cfg(feature = "metrics")]
                counter!("session_operations_settled_total", "workload" => name).increment(1);

                tokio::time::sleep(delay).await;
                drop(permit);
            });
        }

        self.emit(SessionEvent::CancelRequested {
            workload_name: self.config.name.clone(),
            timestamp: Instant::now(),
        });

        #[cfg(feature = "tracing")]
        tracing::info!(
            workload = %self.config.name,
            still_in_flight = self.gate.in_flight(),
            "cancellation observed, no further operations will be admitted"
        );
    }

    fn emit(&self, event: SessionEvent) {
        self.config.event_listeners.emit(&event);
    }
}
