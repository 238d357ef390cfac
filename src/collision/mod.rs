//! Collision response. Only a flat, axis-aligned ground plane is modelled.

pub mod ground;

pub use ground::{handle_ground_collision, GroundPlane};
