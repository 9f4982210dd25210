//! Timing harness.
//!
//! Wraps one call in a pair of monotonic `Instant` readings. Nothing else
//! runs between the two readings, so the harness adds constant overhead
//! regardless of input size.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::convert::Algorithm;

/// A value together with how long it took to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }

    /// Tag the measurement with the algorithm that produced it.
    #[must_use]
    pub fn sample(&self, algorithm: Algorithm) -> TimingSample {
        TimingSample {
            algorithm,
            elapsed_ms: self.elapsed_ms(),
        }
    }
}

/// One trial's duration, tagged by algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub algorithm: Algorithm,
    pub elapsed_ms: f64,
}

/// Run `op` and measure its wall-clock duration on a monotonic clock.
#[inline]
pub fn timed_call<T, F>(op: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = black_box(op());
    let elapsed = start.elapsed();
    Timed { value, elapsed }
}

/// Convert a duration to fractional milliseconds.
#[must_use]
pub fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
