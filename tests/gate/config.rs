use pgstress_gate::GateConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn builder_defaults_admit_one_at_a_time() {
    let gate = GateConfig::builder().build();
    assert_eq!(gate.capacity(), 1);

    let _permit = gate.acquire().await.unwrap();
    assert_eq!(gate.in_flight(), 1);
}

#[tokio::test]
async fn callbacks_observe_the_full_permit_lifecycle() {
    let acquired = Arc::new(AtomicUsize::new(0));
    let released = Arc::new(AtomicUsize::new(0));
    let cancelled = Arc::new(AtomicUsize::new(0));
    let a = Arc::clone(&acquired);
    let r = Arc::clone(&released);
    let c = Arc::clone(&cancelled);

    let gate = GateConfig::builder()
        .capacity(1)
        .name("callback-gate")
        .on_slot_acquired(move |in_flight| {
            assert!(in_flight >= 1);
            a.fetch_add(1, Ordering::SeqCst);
        })
        .on_slot_released(move |_held| {
            r.fetch_add(1, Ordering::SeqCst);
        })
        .on_acquire_cancelled(move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    let permit = gate.acquire().await.unwrap();

    let shutdown = CancellationToken::new();
    shutdown.cancel();
    let _ = gate.acquire_with(&shutdown).await;

    drop(permit);

    assert_eq!(acquired.load(Ordering::SeqCst), 1);
    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
}

#[test]
#[should_panic(expected = "capacity must be at least 1")]
fn rejects_zero_capacity() {
    let _ = GateConfig::builder().capacity(0).build();
}
