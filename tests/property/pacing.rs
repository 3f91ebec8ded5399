//! Property tests for the pacer's delay arithmetic.

use pgstress_engine::Pacer;
use proptest::prelude::*;
use std::num::NonZeroU32;
use std::time::Duration;

proptest! {
    /// rate x delay recovers one second, modulo integer-division rounding of
    /// less than one nanosecond per operation.
    #[test]
    fn delay_inverts_the_rate(rate in 1u32..1_000_000) {
        let pacer = Pacer::per_operation(NonZeroU32::new(rate).unwrap());
        let total = pacer.delay() * rate;

        prop_assert!(total <= Duration::from_secs(1));
        prop_assert!(
            Duration::from_secs(1) - total < Duration::from_nanos(u64::from(rate)),
            "rounding loss {:?} too large for rate {rate}",
            Duration::from_secs(1) - total
        );
    }

    /// A higher rate never yields a longer delay.
    #[test]
    fn delay_is_monotone_in_the_rate(rate in 1u32..1_000_000) {
        let slow = Pacer::per_operation(NonZeroU32::new(rate).unwrap());
        let fast = Pacer::per_operation(NonZeroU32::new(rate + 1).unwrap());
        prop_assert!(fast.delay() <= slow.delay());
    }

    /// The delay is always positive for rates up to 1GHz; the division can
    /// never reach zero and stall a slot forever at realistic rates.
    #[test]
    fn delay_stays_positive(rate in 1u32..1_000_000_000) {
        let pacer = Pacer::per_operation(NonZeroU32::new(rate).unwrap());
        prop_assert!(pacer.delay() > Duration::ZERO);
    }
}
