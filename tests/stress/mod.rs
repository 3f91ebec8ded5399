//! Stress tests for the pgstress primitives.
//!
//! ## What we test
//!
//! - **High volume**: thousands of operations through narrow gates
//! - **High concurrency**: dispatch loops running flat out
//! - **State consistency**: the capacity invariant under real contention
//! - **Resource cleanup**: no deadlocks, leaks, or missed teardowns

pub mod session;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Utility: track peak concurrent operations.
pub struct ConcurrencyTracker {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl ConcurrencyTracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        })
    }

    pub fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        let mut peak = self.peak.load(Ordering::SeqCst);
        while now > peak {
            match self
                .peak
                .compare_exchange_weak(peak, now, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => break,
                Err(p) => peak = p,
            }
        }
    }

    pub fn exit(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}
