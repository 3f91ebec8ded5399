//! Dispatch-rate behavior under a paused clock.
//!
//! These tests freeze tokio's clock, so sleeps resolve in virtual time and
//! dispatch counts are reproducible. Bounds stay generous anyway: the only
//! scheduling race left is cancellation landing on the same instant as a
//! dispatch.

use super::FakeWorkload;
use pgstress_engine::{Session, SessionConfig};
use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

struct DispatchLog {
    stamps: Mutex<Vec<Instant>>,
}

impl DispatchLog {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            stamps: Mutex::new(Vec::new()),
        })
    }

    fn record(&self) {
        self.stamps.lock().unwrap().push(Instant::now());
    }

    fn count(&self) -> usize {
        self.stamps.lock().unwrap().len()
    }

    fn gaps(&self) -> Vec<Duration> {
        let stamps = self.stamps.lock().unwrap();
        stamps.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

fn session_for(
    workers: usize,
    rate: u32,
    workload: Arc<FakeWorkload>,
    log: Arc<DispatchLog>,
) -> Session<Arc<FakeWorkload>> {
    let config = SessionConfig::builder()
        .workers(workers)
        .ops_per_second(NonZeroU32::new(rate).unwrap())
        .name("pacing")
        .on_dispatch(move |_| log.record())
        .build();
    Session::new(config, workload)
}

fn cancel_after(shutdown: &CancellationToken, after: Duration) {
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        trigger.cancel();
    });
}

/// With one slot and negligible latency, the dispatch rate tracks the
/// configured rate: one operation per 1s/rate.
#[tokio::test(start_paused = true)]
async fn single_slot_rate_tracks_target() {
    let workload = FakeWorkload::instant();
    let log = DispatchLog::new();
    let session = session_for(1, 10, Arc::clone(&workload), Arc::clone(&log));

    let shutdown = CancellationToken::new();
    cancel_after(&shutdown, Duration::from_secs(2));
    session.run(shutdown).await.unwrap();

    // 10 ops/s for 2 virtual seconds.
    let dispatched = log.count();
    assert!(
        (18..=22).contains(&dispatched),
        "expected ~20 dispatches, got {dispatched}"
    );

    // Consecutive dispatches sit one pacing delay apart.
    for gap in log.gaps() {
        assert!(
            gap >= Duration::from_millis(90) && gap <= Duration::from_millis(110),
            "dispatch gap {gap:?} strayed from the 100ms pacing delay"
        );
    }
}

/// The pacing delay is applied per worker slot, not globally: doubling the
/// slots doubles the aggregate dispatch rate when latency is negligible.
#[tokio::test(start_paused = true)]
async fn per_slot_pacing_scales_with_workers() {
    let workload = FakeWorkload::instant();
    let log = DispatchLog::new();
    let session = session_for(2, 10, Arc::clone(&workload), Arc::clone(&log));

    let shutdown = CancellationToken::new();
    cancel_after(&shutdown, Duration::from_secs(1));
    session.run(shutdown).await.unwrap();

    // Two slots, each cycling at 10 ops/s.
    let dispatched = log.count();
    assert!(
        (17..=24).contains(&dispatched),
        "expected ~20 dispatches from two 10 ops/s slots, got {dispatched}"
    );
}

/// Under saturation the aggregate rate is slots / (delay + latency), not the
/// configured per-slot rate.
#[tokio::test(start_paused = true)]
async fn saturated_throughput_is_slots_over_cycle() {
    // 100ms delay + 100ms latency = 200ms cycle per slot; four slots give
    // 20 ops/s aggregate even though the configured rate is 10.
    let workload = FakeWorkload::with_latency(Duration::from_millis(100));
    let log = DispatchLog::new();
    let session = session_for(4, 10, Arc::clone(&workload), Arc::clone(&log));

    let shutdown = CancellationToken::new();
    cancel_after(&shutdown, Duration::from_secs(1));
    session.run(shutdown).await.unwrap();

    let dispatched = log.count();
    assert!(
        (16..=26).contains(&dispatched),
        "expected ~20 dispatches from four saturated slots, got {dispatched}"
    );
}
