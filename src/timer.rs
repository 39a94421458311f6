//! Wall-clock timing for the benchmark loops.

use std::time::Instant;

/// Lightweight timer wrapping `std::time::Instant`.
pub struct BenchTimer {
    start: Instant,
}

impl BenchTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Returns elapsed time in nanoseconds, saturating at `u64::MAX`.
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer_is_monotonic() {
        let timer = BenchTimer::start();
        let a = timer.elapsed_nanos();
        std::thread::sleep(Duration::from_millis(2));
        let b = timer.elapsed_nanos();
        assert!(b >= a + 2_000_000);
    }
}
