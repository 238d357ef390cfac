//! Initial state for spawned bodies: ejected shell casings and launched shots.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::{config::PhysicsConfig, core::body::Body, utils::math::direction_from_angle};

/// Builds a shell casing thrown out sideways from a barrel at `(source_x, source_y)`
/// facing `source_angle` (radians).
///
/// The casing leaves perpendicular to the barrel, starts slightly above it, and
/// gets an extra upward kick so it arcs before falling. It is ready for the
/// generic integrator and the ground responder; registering it is up to the caller.
pub fn create_shell_ejection(
    source_x: f32,
    source_y: f32,
    source_angle: f32,
    config: &PhysicsConfig,
) -> Body {
    let ejection_angle = source_angle + FRAC_PI_2;

    let position = Vec2::new(source_x, source_y + config.shell_spawn_offset_y);
    let mut velocity = direction_from_angle(ejection_angle) * config.shell_ejection_speed;
    velocity.y -= config.shell_upward_bias;

    Body::new(position)
        .with_velocity(velocity)
        .with_bounce(config.shell_bounce)
        .with_friction(config.shell_friction)
}

/// Builds a projectile leaving `origin` along `angle` (radians) at `speed`.
pub fn launch_projectile(origin: Vec2, angle: f32, speed: f32) -> Body {
    Body::new(origin).with_velocity(direction_from_angle(angle) * speed)
}
