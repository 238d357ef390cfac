//! Additional math helpers layered on top of `glam`.

use glam::Vec2;

/// Unit vector pointing along `angle` (radians, measured from +x toward +y).
pub fn direction_from_angle(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, sin)
}

/// Blends the pre-tick and post-tick positions for rendering between ticks.
pub fn interpolate_position(previous: Vec2, current: Vec2, alpha: f32) -> Vec2 {
    previous.lerp(current, alpha.clamp(0.0, 1.0))
}
