//! Arcade Physics – fixed-timestep 2D integration for arcade action games.
//!
//! A caller-owned [`SimulationClock`] turns variable frame timestamps into whole
//! fixed ticks. Each tick advances bodies through one configurable
//! [`integrate`] function (generic bodies, projectiles, particles), optionally
//! followed by a flat ground-plane response. [`PhysicsWorld`] wires these
//! together over a generational body arena.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::ground::{handle_ground_collision, GroundPlane};
pub use config::PhysicsConfig;
pub use crate::core::{
    body::{Body, BodyKind, TrackedBody},
    clock::SimulationClock,
};
#[cfg(feature = "parallel")]
pub use dynamics::parallel::ParallelIntegrator;
pub use dynamics::{
    integrator::{integrate, DampingModel, IntegrationProfile, Integrator},
    trajectory::{create_shell_ejection, launch_projectile},
};
pub use error::ConfigError;
pub use utils::allocator::{Arena, BodyHandle};
pub use world::{PhysicsWorld, StepReport};
