use std::time::Duration;

/// Returns a value in `[min, max)` when `max > min`, otherwise `min` exactly.
///
/// Degenerate ranges (`min >= max`) are not an error; they collapse to `min`.
/// Draws from the calling thread's generator; the binary seeds the main
/// thread's generator once at startup from the wall clock.
pub fn random_between(min: i64, max: i64) -> i64 {
    if max > min {
        min + fastrand::i64(0..max - min)
    } else {
        min
    }
}

/// Inclusive-lower / exclusive-upper bounds for a simulated service delay,
/// in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayBounds {
    pub min_ms: i64,
    pub max_ms: i64,
}

impl DelayBounds {
    pub fn new(min_ms: i64, max_ms: i64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Samples one delay. Negative samples clamp to zero rather than failing,
    /// so lenient CLI input still produces a runnable configuration.
    pub fn sample(&self) -> Duration {
        let ms = random_between(self.min_ms, self.max_ms).max(0);
        Duration::from_millis(ms as u64)
    }
}
