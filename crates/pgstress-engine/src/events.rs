//! Event types for the session engine.

use pgstress_core::events::WorkloadEvent;
use std::time::{Duration, Instant};

/// Events emitted over the course of a session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Fixtures were created and seeded; the loop is about to start.
    FixturePrepared {
        /// Name of the workload instance
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
        /// How long preparation took
        elapsed: Duration,
    },
    /// An operation was admitted and handed to a worker task.
    OperationDispatched {
        /// Name of the workload instance
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
        /// Number of operations in flight after this dispatch
        in_flight: usize,
    },
    /// A dispatched operation ran to completion (its outcome is discarded).
    OperationSettled {
        /// Name of the workload instance
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
        /// Time the operation spent executing, excluding the pacing delay
        elapsed: Duration,
    },
    /// Cancellation was observed; no further operations will be admitted.
    CancelRequested {
        /// Name of the workload instance
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
    },
    /// Fixtures were removed during teardown.
    FixtureRemoved {
        /// Name of the workload instance
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
    },
    /// Teardown failed; the error was swallowed.
    CleanupFailed {
        /// Name of the workload instance
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
        /// Description of the swallowed error
        message: String,
    },
}

impl WorkloadEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::FixturePrepared { .. } => "session.fixture_prepared",
            SessionEvent::OperationDispatched { .. } => "session.operation_dispatched",
            SessionEvent::OperationSettled { .. } => "session.operation_settled",
            SessionEvent::CancelRequested { .. } => "session.cancel_requested",
            SessionEvent::FixtureRemoved { .. } => "session.fixture_removed",
            SessionEvent::CleanupFailed { .. } => "session.cleanup_failed",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            SessionEvent::FixturePrepared { timestamp, .. }
            | SessionEvent::OperationDispatched { timestamp, .. }
            | SessionEvent::OperationSettled { timestamp, .. }
            | SessionEvent::CancelRequested { timestamp, .. }
            | SessionEvent::FixtureRemoved { timestamp, .. }
            | SessionEvent::CleanupFailed { timestamp, .. } => *timestamp,
        }
    }

    fn workload_name(&self) -> &str {
        match self {
            SessionEvent::FixturePrepared { workload_name, .. }
            | SessionEvent::OperationDispatched { workload_name, .. }
            | SessionEvent::OperationSettled { workload_name, .. }
            | SessionEvent::CancelRequested { workload_name, .. }
            | SessionEvent::FixtureRemoved { workload_name, .. }
            | SessionEvent::CleanupFailed { workload_name, .. } => workload_name,
        }
    }
}
