//! Fixed-rate tick pacing
//!
//! The window toolkit calls back once per frame with however much time has
//! passed. [`FixedStep`] turns that into a whole number of clock ticks so the
//! hand moves at the same speed regardless of frame rate.

use std::time::Duration;

/// Default tick rate in Hz
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// Most ticks run for a single frame before the backlog is dropped
pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

/// Accumulates elapsed time and hands out fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    max_catch_up: u32,
}

impl FixedStep {
    /// Pacer for `rate` ticks per second. Non-positive or non-finite rates
    /// fall back to [`DEFAULT_TICK_RATE`].
    pub fn from_rate(rate: f64) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            DEFAULT_TICK_RATE
        };
        Self {
            interval: Duration::from_secs_f64(1.0 / rate),
            accumulator: Duration::ZERO,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and return how many ticks are due.
    ///
    /// A backlog larger than the catch-up cap is discarded, so a stalled frame
    /// does not spin the hand in one burst.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            due += 1;
            if due == self.max_catch_up {
                if self.accumulator >= self.interval {
                    self.accumulator = Duration::ZERO;
                }
                break;
            }
        }
        due
    }

    /// Forget any partial tick
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::from_rate(DEFAULT_TICK_RATE)
    }
}
