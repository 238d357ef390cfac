use log::debug;

use crate::config::{tick_tolerance, PhysicsConfig};

/// Fixed-timestep accumulator turning variable frame timestamps into whole ticks.
///
/// Owned by the caller; independent clocks never share state, so replays and
/// tests can run side by side.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    current_time: f64,
    accumulator: f64,
    fixed_step: f64,
    max_delta: f64,
    max_accumulator: f64,
    total_ticks: u64,
    clamped_frames: u64,
}

impl SimulationClock {
    /// Creates a clock at time zero using the step and clamp bounds from `config`.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            current_time: 0.0,
            accumulator: 0.0,
            fixed_step: config.fixed_step,
            max_delta: config.max_delta,
            max_accumulator: config.max_accumulator,
            total_ticks: 0,
            clamped_frames: 0,
        }
    }

    /// Anchors the clock at `now` with nothing pending. Call before the first update.
    pub fn initialize(&mut self, now: f64) {
        self.current_time = now;
        self.accumulator = 0.0;
    }

    /// Re-anchors at `now`, discarding pending time. Use on pause/resume so the
    /// paused interval is never replayed.
    pub fn reset(&mut self, now: f64) {
        self.initialize(now);
    }

    /// Accounts for a new frame timestamp and runs `on_tick(fixed_step)` once per
    /// whole step that has elapsed. Returns the number of ticks executed, never
    /// more than [`max_ticks_per_frame`](Self::max_ticks_per_frame).
    pub fn update<F>(&mut self, frame_timestamp: f64, mut on_tick: F) -> u32
    where
        F: FnMut(f64),
    {
        self.accumulate(frame_timestamp);

        let max_ticks = self.max_ticks_per_frame();
        let mut ticks = 0u32;
        while ticks < max_ticks && self.has_whole_step() {
            on_tick(self.fixed_step);
            self.accumulator = (self.accumulator - self.fixed_step).max(0.0);
            ticks += 1;
        }
        self.total_ticks += u64::from(ticks);
        ticks
    }

    /// Same accounting as [`update`](Self::update) for hosts that drive the
    /// returned number of ticks themselves.
    pub fn advance(&mut self, frame_timestamp: f64) -> u32 {
        self.update(frame_timestamp, |_| {})
    }

    /// A step that is zero, negative or NaN never ticks.
    fn has_whole_step(&self) -> bool {
        self.fixed_step > 0.0
            && self.accumulator + tick_tolerance(self.fixed_step) >= self.fixed_step
    }

    fn accumulate(&mut self, frame_timestamp: f64) {
        let mut delta = frame_timestamp - self.current_time;
        if !delta.is_finite() || delta < 0.0 {
            debug!(
                "clock: ignoring non-increasing timestamp {frame_timestamp} (sim time {})",
                self.current_time
            );
            delta = 0.0;
        }

        let mut clamped = false;
        if delta > self.max_delta {
            debug!(
                "clock: frame delta {:.3}s clamped to {:.3}s",
                delta, self.max_delta
            );
            delta = self.max_delta;
            clamped = true;
        }

        if frame_timestamp.is_finite() {
            self.current_time = frame_timestamp;
        }

        self.accumulator += delta;
        if self.accumulator > self.max_accumulator {
            debug!(
                "clock: dropping {:.3}s of pending simulation time",
                self.accumulator - self.max_accumulator
            );
            self.accumulator = self.max_accumulator;
            clamped = true;
        }
        self.accumulator = self.accumulator.max(0.0);

        if clamped {
            self.clamped_frames += 1;
        }
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)` after an update.
    pub fn interpolation_alpha(&self) -> f64 {
        if self.fixed_step > 0.0 {
            (self.accumulator / self.fixed_step).clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        }
    }

    pub fn fixed_timestep(&self) -> f64 {
        self.fixed_step
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn max_ticks_per_frame(&self) -> u32 {
        if self.fixed_step > 0.0 {
            ((self.max_accumulator + tick_tolerance(self.fixed_step)) / self.fixed_step).floor()
                as u32
        } else {
            0
        }
    }

    /// Ticks executed since the clock was created.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Frames whose delta or backlog had to be discarded.
    pub fn clamped_frames(&self) -> u64 {
        self.clamped_frames
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}
