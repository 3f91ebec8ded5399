//! Event types for the admission gate.

use pgstress_core::events::WorkloadEvent;
use std::time::{Duration, Instant};

/// Events emitted by the admission gate.
#[derive(Debug, Clone)]
pub enum GateEvent {
    /// A slot was acquired and an operation may be dispatched.
    SlotAcquired {
        /// Name of the workload instance this gate belongs to
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
        /// Number of slots in use after this acquisition
        in_flight: usize,
    },
    /// A slot was handed back to the gate.
    SlotReleased {
        /// Name of the workload instance this gate belongs to
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
        /// How long the slot was held
        held: Duration,
    },
    /// A waiting acquisition was abandoned because the session was cancelled.
    AcquireCancelled {
        /// Name of the workload instance this gate belongs to
        workload_name: String,
        /// When the event occurred
        timestamp: Instant,
    },
}

impl WorkloadEvent for GateEvent {
    fn event_type(&self) -> &'static str {
        match self {
            GateEvent::SlotAcquired { .. } => "gate.slot_acquired",
            GateEvent::SlotReleased { .. } => "gate.slot_released",
            GateEvent::AcquireCancelled { .. } => "gate.acquire_cancelled",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            GateEvent::SlotAcquired { timestamp, .. }
            | GateEvent::SlotReleased { timestamp, .. }
            | GateEvent::AcquireCancelled { timestamp, .. } => *timestamp,
        }
    }

    fn workload_name(&self) -> &str {
        match self {
            GateEvent::SlotAcquired { workload_name, .. }
            | GateEvent::SlotReleased { workload_name, .. }
            | GateEvent::AcquireCancelled { workload_name, .. } => workload_name,
        }
    }
}
