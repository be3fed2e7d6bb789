//! Frame clocks

use std::time::{Duration, Instant};

/// Time source polled once per loop iteration
pub trait Clock {
    /// Milliseconds since the clock started
    fn now_ms(&self) -> u64;

    /// Seconds elapsed since the previous call (or since creation)
    fn tick(&mut self) -> f64;
}

/// Wall clock
pub struct SystemClock {
    start: Instant,
    last: Duration,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last: Duration::ZERO,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn tick(&mut self) -> f64 {
        let now = self.start.elapsed();
        let delta = now.saturating_sub(self.last);
        self.last = now;
        delta.as_secs_f64()
    }
}

/// Simulated clock that moves forward a fixed step on every tick
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Duration,
    step: Duration,
}

impl ManualClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            step,
        }
    }

    pub fn from_millis(step_ms: u64) -> Self {
        Self::new(Duration::from_millis(step_ms))
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Move time forward without producing a frame delta
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.as_millis() as u64
    }

    fn tick(&mut self) -> f64 {
        self.now += self.step;
        self.step.as_secs_f64()
    }
}
