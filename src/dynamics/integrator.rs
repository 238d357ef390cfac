use crate::{
    config::PhysicsConfig,
    core::body::{Body, BodyKind},
};

/// Frame rate the particle damping constants were tuned at.
pub const PARTICLE_REFERENCE_FPS: f32 = 60.0;

/// How velocity decays over one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DampingModel {
    /// `v *= factor` once per tick, independent of `dt`. Only meaningful when the
    /// integrator is always driven at the same fixed step.
    PerTick(f32),
    /// `v *= factor ^ (dt * 60)`: a per-frame-at-60fps constant turned into a
    /// continuous decay, so the curve does not depend on the step length.
    NormalizedTo60Fps(f32),
}

impl DampingModel {
    pub fn factor(self, dt: f32) -> f32 {
        match self {
            DampingModel::PerTick(factor) => factor,
            DampingModel::NormalizedTo60Fps(factor) => factor.powf(dt * PARTICLE_REFERENCE_FPS),
        }
    }
}

/// Per-category coefficients for [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationProfile {
    pub gravity_scale: f32,
    pub damping: DampingModel,
    pub use_acceleration: bool,
}

impl IntegrationProfile {
    /// Vehicles and debris: full gravity, acceleration fields, flat air friction.
    pub fn generic(config: &PhysicsConfig) -> Self {
        Self {
            gravity_scale: 1.0,
            damping: DampingModel::PerTick(config.air_friction),
            use_acceleration: true,
        }
    }

    /// Ballistic shots: scaled gravity, flat velocity damping, no acceleration.
    pub fn projectile(config: &PhysicsConfig) -> Self {
        Self {
            gravity_scale: config.projectile_gravity_scale,
            damping: DampingModel::PerTick(config.velocity_damping),
            use_acceleration: false,
        }
    }

    /// Effects: caller-chosen weight and the 60fps-normalized damping curve.
    ///
    /// Unlike [`generic`](Self::generic) and [`projectile`](Self::projectile),
    /// particle damping does not change when the fixed step does. Keep it that
    /// way: particle visuals were tuned against this curve.
    ///
    /// A non-finite `gravity_scale` counts as absent and falls back to `1.0`.
    pub fn particle(config: &PhysicsConfig, gravity_scale: f32) -> Self {
        Self {
            gravity_scale: if gravity_scale.is_finite() {
                gravity_scale
            } else {
                1.0
            },
            damping: DampingModel::NormalizedTo60Fps(config.velocity_damping),
            use_acceleration: false,
        }
    }

    pub fn for_kind(config: &PhysicsConfig, kind: BodyKind) -> Self {
        match kind {
            BodyKind::Generic => Self::generic(config),
            BodyKind::Projectile => Self::projectile(config),
            BodyKind::Particle { gravity_scale } => Self::particle(config, gravity_scale),
        }
    }
}

/// Advances `body` by exactly one tick of length `dt`.
///
/// Order: gravity, acceleration, damping, then position from the damped
/// velocity (semi-implicit Euler).
pub fn integrate(body: &mut Body, dt: f32, gravity: f32, profile: &IntegrationProfile) {
    if body.affected_by_gravity {
        body.velocity.y += gravity * profile.gravity_scale * dt;
    }

    if profile.use_acceleration {
        if let Some(acceleration) = body.effective_acceleration() {
            body.velocity += acceleration * dt;
        }
    }

    body.velocity *= profile.damping.factor(dt);
    body.position += body.velocity * dt;
}

/// Stateless integrator bound to one configuration table.
#[derive(Debug, Clone)]
pub struct Integrator {
    config: PhysicsConfig,
    generic: IntegrationProfile,
    projectile: IntegrationProfile,
}

impl Integrator {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            generic: IntegrationProfile::generic(&config),
            projectile: IntegrationProfile::projectile(&config),
            config,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn fixed_step(&self) -> f32 {
        self.config.fixed_step as f32
    }

    pub fn integrate_body(&self, body: &mut Body, dt: f32) {
        self.check_step(dt);
        integrate(body, dt, self.config.gravity, &self.generic);
    }

    pub fn integrate_projectile(&self, body: &mut Body, dt: f32) {
        self.check_step(dt);
        integrate(body, dt, self.config.gravity, &self.projectile);
    }

    pub fn integrate_particle(&self, body: &mut Body, dt: f32, gravity_scale: f32) {
        self.check_step(dt);
        let profile = IntegrationProfile::particle(&self.config, gravity_scale);
        integrate(body, dt, self.config.gravity, &profile);
    }

    pub fn integrate_kind(&self, body: &mut Body, kind: BodyKind, dt: f32) {
        match kind {
            BodyKind::Generic => self.integrate_body(body, dt),
            BodyKind::Projectile => self.integrate_projectile(body, dt),
            BodyKind::Particle { gravity_scale } => {
                self.integrate_particle(body, dt, gravity_scale)
            }
        }
    }

    /// Feeding a frame delta instead of the fixed step silently breaks frame-rate
    /// independence, so catch it in debug builds.
    fn check_step(&self, dt: f32) {
        debug_assert!(
            (dt - self.fixed_step()).abs() <= 1e-6,
            "integrator driven with dt={dt}, expected fixed step {}",
            self.fixed_step()
        );
    }
}
