//! Frame timing for the cockpit loop.

use std::time::Duration;

/// Counts frames and accumulates wall time so the simulation can step at a
/// fixed rate while the cockpit runs once per rendered frame.
#[derive(Debug)]
pub struct FrameClock {
    /// Frames advanced so far.
    frame_count: u64,
    /// Total time fed into the clock.
    elapsed: Duration,
    /// Fixed step used by the simulation (default 60 Hz).
    fixed_step: Duration,
    /// Time not yet consumed by fixed steps.
    accumulator: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            elapsed: Duration::ZERO,
            fixed_step: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Begin a new frame that took `delta` of wall time.
    pub fn advance(&mut self, delta: Duration) {
        self.frame_count += 1;
        self.elapsed += delta;
        self.accumulator += delta;
    }

    /// Consume one fixed step if enough time has accumulated.
    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.fixed_step {
            self.accumulator -= self.fixed_step;
            true
        } else {
            false
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Fixed step in seconds.
    pub fn step_seconds(&self) -> f32 {
        self.fixed_step.as_secs_f32()
    }

    pub fn fixed_step(&self) -> Duration {
        self.fixed_step
    }

    /// Set the fixed step rate in Hz.
    pub fn set_step_rate(&mut self, hz: f64) {
        self.fixed_step = Duration::from_secs_f64(1.0 / hz);
    }
}
