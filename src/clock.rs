//! Monotonic timestamps used to bracket one timed unit of work.
//!
//! The default clock reports wall-clock microseconds since a process-global
//! epoch. The `cycle-timer` Cargo feature switches to the hardware cycle
//! counter on x86_64; on every other target the feature is a no-op and the
//! wall clock remains in effect.

#[cfg(not(all(feature = "cycle-timer", target_arch = "x86_64")))]
use std::time::Instant;

#[cfg(not(all(feature = "cycle-timer", target_arch = "x86_64")))]
use lazy_static::lazy_static;

#[cfg(not(all(feature = "cycle-timer", target_arch = "x86_64")))]
lazy_static! {
    static ref EPOCH: Instant = Instant::now();
}

/// Returns a monotonically increasing timestamp in microseconds.
#[cfg(not(all(feature = "cycle-timer", target_arch = "x86_64")))]
#[inline]
pub fn raw_timestamp() -> u64 {
    EPOCH.elapsed().as_micros() as u64
}

/// Returns the hardware cycle counter.
#[cfg(all(feature = "cycle-timer", target_arch = "x86_64"))]
#[inline]
pub fn raw_timestamp() -> u64 {
    // RDTSC is monotonic on any CPU with an invariant TSC, which is every
    // machine this benchmark targets.
    unsafe { core::arch::x86_64::_rdtsc() }
}

/// Human-readable unit of [`raw_timestamp`] deltas.
pub fn time_unit() -> &'static str {
    if cfg!(all(feature = "cycle-timer", target_arch = "x86_64")) {
        "cycles"
    } else {
        "us"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_are_monotonic() {
        let mut prev = raw_timestamp();
        for _ in 0..1000 {
            let now = raw_timestamp();
            assert!(now >= prev);
            prev = now;
        }
    }

    #[test]
    fn test_timestamp_advances() {
        let start = raw_timestamp();
        let mut spin = 0u64;
        while raw_timestamp() == start {
            spin = spin.wrapping_add(1);
            if spin > 1_000_000_000 {
                panic!("clock never advanced");
            }
        }
    }
}
