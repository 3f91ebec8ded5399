//! Session engine stress tests.

use async_trait::async_trait;
use pgstress_core::BoxError;
use pgstress_engine::{Session, SessionConfig, Workload};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::ConcurrencyTracker;

struct StressWorkload {
    tracker: Arc<ConcurrencyTracker>,
    exercised: AtomicUsize,
    cleaned: AtomicUsize,
}

#[async_trait]
impl Workload for StressWorkload {
    async fn prepare(&self) -> Result<(), BoxError> {
        Ok(())
    }

    async fn exercise(&self) -> Result<(), BoxError> {
        self.tracker.enter();
        tokio::time::sleep(Duration::from_micros(500)).await;
        self.tracker.exit();
        self.exercised.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn cleanup(&self) -> Result<(), BoxError> {
        self.cleaned.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Test: a wide, fast session holds its concurrency cap for a full two
/// seconds of wall-clock churn and still tears down exactly once.
#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn stress_sustained_dispatch() {
    let workload = Arc::new(StressWorkload {
        tracker: ConcurrencyTracker::new(),
        exercised: AtomicUsize::new(0),
        cleaned: AtomicUsize::new(0),
    });

    let config = SessionConfig::builder()
        .workers(50)
        .ops_per_second(NonZeroU32::new(1000).unwrap())
        .name("stress")
        .build();

    let session = Session::new(config, Arc::clone(&workload));
    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        trigger.cancel();
    });

    session.run(shutdown).await.unwrap();

    // Give stragglers a moment, then check the books.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let exercised = workload.exercised.load(Ordering::SeqCst);
    assert!(
        exercised >= 1000,
        "expected a few thousand operations, got {exercised}"
    );
    assert!(
        workload.tracker.peak() <= 50,
        "peak {} exceeded 50 slots",
        workload.tracker.peak()
    );
    assert_eq!(workload.cleaned.load(Ordering::SeqCst), 1);
}

/// Test: cancellation under load never deadlocks and never double-cleans.
#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn stress_repeated_short_sessions() {
    for _ in 0..50 {
        let workload = Arc::new(StressWorkload {
            tracker: ConcurrencyTracker::new(),
            exercised: AtomicUsize::new(0),
            cleaned: AtomicUsize::new(0),
        });

        let config = SessionConfig::builder()
            .workers(8)
            .ops_per_second(NonZeroU32::new(500).unwrap())
            .build();

        let session = Session::new(config, Arc::clone(&workload));
        let shutdown = CancellationToken::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        session.run(shutdown).await.unwrap();
        assert_eq!(workload.cleaned.load(Ordering::SeqCst), 1);
    }
}
