//! Time management utilities
//!
//! The animation core itself never reads the clock. These helpers are for
//! drivers that want measured frame deltas and for load-time profiling.

use std::time::{Duration, Instant};

/// Upper bound for a measured delta, in seconds
pub const MAX_MEASURED_DELTA: f32 = 0.25;

/// Frame timer producing measured deltas for the animation tick
pub struct Timer {
    last_frame: Instant,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame_count: 0,
        }
    }

    /// Advance the timer and return the measured delta in seconds
    ///
    /// Call once per frame. The delta is clamped to [`MAX_MEASURED_DELTA`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32().min(MAX_MEASURED_DELTA);
        self.last_frame = now;
        self.frame_count += 1;
        delta_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_tick_is_clamped() {
        let mut timer = Timer::new();
        let delta = timer.tick();
        assert!(delta >= 0.0 && delta <= MAX_MEASURED_DELTA);
        assert_eq!(timer.frame_count(), 1);
    }

    #[test]
    fn test_stopwatch_accumulates_only_while_running() {
        let mut stopwatch = Stopwatch::new();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);

        stopwatch.start();
        assert!(stopwatch.is_running());
        stopwatch.stop();
        let frozen = stopwatch.elapsed();
        assert_eq!(stopwatch.elapsed(), frozen);
    }
}
