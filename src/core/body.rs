use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kinematic state of one simulated object (tank, shell casing, projectile, particle).
///
/// Optional fields model properties a spawner may leave out. Integrators and the
/// ground responder treat an absent or non-finite value as "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Option<Vec2>,
    pub mass: Option<f32>,
    pub friction: Option<f32>,
    pub bounce: Option<f32>,
    /// Cleared only when gravity is explicitly disabled.
    pub affected_by_gravity: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: None,
            mass: None,
            friction: None,
            bounce: None,
            affected_by_gravity: true,
        }
    }
}

impl Body {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = Some(bounce);
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.affected_by_gravity = false;
        self
    }

    /// Acceleration that should actually be applied this tick, if any.
    pub fn effective_acceleration(&self) -> Option<Vec2> {
        self.acceleration
            .filter(|a| a.is_finite() && *a != Vec2::ZERO)
    }

    /// Bounce coefficient when present, finite, and positive.
    pub fn effective_bounce(&self) -> Option<f32> {
        self.bounce.filter(|b| b.is_finite() && *b > 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Integration category a body is advanced with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum BodyKind {
    /// Vehicles, shell casings, debris.
    #[default]
    Generic,
    /// Ballistic shots; acceleration is ignored once launched.
    Projectile,
    /// Visual effects with their own gravity weight.
    Particle { gravity_scale: f32 },
}

impl BodyKind {
    /// Particle with the default gravity weight of `1.0`.
    pub fn particle() -> Self {
        BodyKind::Particle { gravity_scale: 1.0 }
    }
}

/// A body registered with a world, with its category and the position it held
/// before the latest tick (for render interpolation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedBody {
    pub state: Body,
    pub kind: BodyKind,
    pub previous_position: Vec2,
}

impl TrackedBody {
    pub fn new(state: Body, kind: BodyKind) -> Self {
        Self {
            previous_position: state.position,
            state,
            kind,
        }
    }
}
