//! Per-slot pacing for the session loop.

use std::num::NonZeroU32;
use std::time::Duration;

/// Converts a target operations-per-second figure into the delay each worker
/// slot observes after its operation completes.
///
/// The delay throttles how quickly a *freed* slot is made available again;
/// there is no global ticker. Under saturation the achieved aggregate rate is
/// therefore `capacity / (delay + mean operation latency)`, and it approaches
/// the configured rate only when concurrency is not the binding constraint.
/// This per-slot approximation is part of the engine's contract: callers tune
/// pressure with the capacity and rate knobs together, and replacing it with
/// an exact global limiter would change observable throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Creates a pacer for the given target rate in operations per second.
    pub fn per_operation(rate: NonZeroU32) -> Self {
        Self {
            delay: Duration::from_secs(1) / rate.get(),
        }
    }

    /// The delay a worker slot observes after each operation.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
