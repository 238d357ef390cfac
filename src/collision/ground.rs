use crate::{config::PhysicsConfig, core::body::Body};

/// Resolves `body` against a flat ground at height `ground_y` (Y-down).
///
/// Bodies above the ground are untouched. Bodies at or below it are snapped onto
/// it; bouncy bodies rebound with the configured damping and anything slower than
/// `bounce_stop_velocity` comes to rest. Horizontal speed always loses
/// `ground_friction` on contact. Returns whether contact happened.
pub fn handle_ground_collision(body: &mut Body, ground_y: f32, config: &PhysicsConfig) -> bool {
    if body.position.y < ground_y {
        return false;
    }

    body.position.y = ground_y;

    if body.effective_bounce().is_some() {
        let rebound = -body.velocity.y * config.bounce_damping;
        // Stability floor against endless micro-bounces.
        body.velocity.y = if rebound.abs() < config.bounce_stop_velocity {
            0.0
        } else {
            rebound
        };
    } else {
        body.velocity.y = 0.0;
    }

    body.velocity.x *= config.ground_friction;
    true
}

/// A horizontal ground line hosts can keep alongside their bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub height: f32,
}

impl GroundPlane {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    pub fn resolve(&self, body: &mut Body, config: &PhysicsConfig) -> bool {
        handle_ground_collision(body, self.height, config)
    }
}
