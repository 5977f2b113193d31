//! Wall-Clock Timing
//!
//! Every protocol phase measures one synchronous call (or one full pass over
//! the scenario texts), so a monotonic `std::time::Instant` is sufficient.

use std::time::Instant;

/// Timer for measuring a single protocol step
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed nanoseconds since `start`
    #[inline(always)]
    pub fn elapsed_nanos(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }

    /// Elapsed milliseconds since `start`, with sub-millisecond precision
    #[inline(always)]
    pub fn stop_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Time `f` and return its output with the elapsed milliseconds
#[inline]
pub(crate) fn time_ms<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let timer = Timer::start();
    let out = f();
    let elapsed = timer.stop_ms();
    (out, elapsed)
}
