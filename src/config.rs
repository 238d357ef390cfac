//! Global configuration constants for the Arcade Physics core.
//!
//! World units are pixels with `+y` pointing down, so gravity is positive and
//! "upward" offsets are negative.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default gravity acceleration (units/s², Y-down).
pub const DEFAULT_GRAVITY: f32 = 980.0;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

/// Largest wall-clock delta a single frame may contribute (in seconds).
pub const DEFAULT_MAX_DELTA: f64 = 0.25;

/// Upper bound on pending simulation time held by the accumulator (in seconds).
pub const DEFAULT_MAX_ACCUMULATOR: f64 = 0.1;

/// Slack (in seconds) when draining the accumulator, so timestamps that are
/// whole multiples of the step never lose a tick to rounding.
pub const TICK_EPSILON: f64 = 1e-9;

/// Drain tolerance for a given step: [`TICK_EPSILON`], but never more than half
/// a step, so a drained accumulator can never satisfy the drain test again.
pub fn tick_tolerance(fixed_step: f64) -> f64 {
    TICK_EPSILON.min(fixed_step * 0.5).max(0.0)
}

/// Per-tick multiplicative decay applied to generic bodies.
pub const DEFAULT_AIR_FRICTION: f32 = 0.99;

/// Horizontal decay applied on every ground contact.
pub const DEFAULT_GROUND_FRICTION: f32 = 0.8;

/// Fraction of vertical speed kept when a bouncy body hits the ground.
pub const DEFAULT_BOUNCE_DAMPING: f32 = 0.5;

/// Rebound speeds below this are zeroed to stop micro-bouncing.
pub const DEFAULT_BOUNCE_STOP_VELOCITY: f32 = 10.0;

/// Damping used by projectiles (per tick) and particles (per 60fps frame).
pub const DEFAULT_VELOCITY_DAMPING: f32 = 0.98;

/// Gravity multiplier applied to projectiles.
pub const DEFAULT_PROJECTILE_GRAVITY_SCALE: f32 = 0.5;

/// Launch speed of ejected shell casings (units/s).
pub const DEFAULT_SHELL_EJECTION_SPEED: f32 = 150.0;

/// Vertical spawn offset of shell casings relative to the barrel (negative is up).
pub const DEFAULT_SHELL_SPAWN_OFFSET_Y: f32 = -10.0;

/// Upward kick subtracted from a casing's vertical launch velocity.
pub const DEFAULT_SHELL_UPWARD_BIAS: f32 = 50.0;

/// Bounce coefficient assigned to new shell casings.
pub const DEFAULT_SHELL_BOUNCE: f32 = 0.3;

/// Friction coefficient assigned to new shell casings.
pub const DEFAULT_SHELL_FRICTION: f32 = 0.8;

/// Named physical constants consumed by the clock, integrators, and responders.
///
/// Loaded once and treated as immutable for the lifetime of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub fixed_step: f64,
    pub max_delta: f64,
    pub max_accumulator: f64,
    pub air_friction: f32,
    pub ground_friction: f32,
    pub bounce_damping: f32,
    pub bounce_stop_velocity: f32,
    pub velocity_damping: f32,
    pub projectile_gravity_scale: f32,
    pub shell_ejection_speed: f32,
    pub shell_spawn_offset_y: f32,
    pub shell_upward_bias: f32,
    pub shell_bounce: f32,
    pub shell_friction: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            fixed_step: DEFAULT_TIME_STEP,
            max_delta: DEFAULT_MAX_DELTA,
            max_accumulator: DEFAULT_MAX_ACCUMULATOR,
            air_friction: DEFAULT_AIR_FRICTION,
            ground_friction: DEFAULT_GROUND_FRICTION,
            bounce_damping: DEFAULT_BOUNCE_DAMPING,
            bounce_stop_velocity: DEFAULT_BOUNCE_STOP_VELOCITY,
            velocity_damping: DEFAULT_VELOCITY_DAMPING,
            projectile_gravity_scale: DEFAULT_PROJECTILE_GRAVITY_SCALE,
            shell_ejection_speed: DEFAULT_SHELL_EJECTION_SPEED,
            shell_spawn_offset_y: DEFAULT_SHELL_SPAWN_OFFSET_Y,
            shell_upward_bias: DEFAULT_SHELL_UPWARD_BIAS,
            shell_bounce: DEFAULT_SHELL_BOUNCE,
            shell_friction: DEFAULT_SHELL_FRICTION,
        }
    }
}

impl PhysicsConfig {
    /// Parses a JSON table of overrides on top of the defaults and validates it.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: PhysicsConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different fixed step, keeping every other constant.
    pub fn with_fixed_step(mut self, fixed_step: f64) -> Self {
        self.fixed_step = fixed_step;
        self
    }

    /// Checks that every constant is usable by the simulation.
    pub fn validate(&self) -> Result<()> {
        let scalars: [(&'static str, f64); 15] = [
            ("gravity", self.gravity as f64),
            ("fixed_step", self.fixed_step),
            ("max_delta", self.max_delta),
            ("max_accumulator", self.max_accumulator),
            ("air_friction", self.air_friction as f64),
            ("ground_friction", self.ground_friction as f64),
            ("bounce_damping", self.bounce_damping as f64),
            ("bounce_stop_velocity", self.bounce_stop_velocity as f64),
            ("velocity_damping", self.velocity_damping as f64),
            ("projectile_gravity_scale", self.projectile_gravity_scale as f64),
            ("shell_ejection_speed", self.shell_ejection_speed as f64),
            ("shell_spawn_offset_y", self.shell_spawn_offset_y as f64),
            ("shell_upward_bias", self.shell_upward_bias as f64),
            ("shell_bounce", self.shell_bounce as f64),
            ("shell_friction", self.shell_friction as f64),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
        }

        if self.fixed_step <= TICK_EPSILON {
            return Err(ConfigError::invalid(
                "fixed_step",
                "must be longer than the tick tolerance",
            ));
        }
        if self.max_delta <= 0.0 {
            return Err(ConfigError::invalid("max_delta", "must be positive"));
        }
        if self.max_accumulator < self.fixed_step {
            return Err(ConfigError::invalid(
                "max_accumulator",
                "must hold at least one fixed step",
            ));
        }
        if self.bounce_stop_velocity < 0.0 {
            return Err(ConfigError::invalid(
                "bounce_stop_velocity",
                "must not be negative",
            ));
        }

        let factors = [
            ("air_friction", self.air_friction),
            ("ground_friction", self.ground_friction),
            ("bounce_damping", self.bounce_damping),
            ("velocity_damping", self.velocity_damping),
        ];
        for (field, value) in factors {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, "must lie in [0, 1]"));
            }
        }

        Ok(())
    }

    /// Worst-case number of ticks a single frame can trigger.
    pub fn max_ticks_per_frame(&self) -> u32 {
        if self.fixed_step <= 0.0 {
            return 0;
        }
        ((self.max_accumulator + tick_tolerance(self.fixed_step)) / self.fixed_step).floor() as u32
    }
}
