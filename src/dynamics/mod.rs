//! Simulation dynamics: per-tick integration and spawn trajectories.

pub mod integrator;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod trajectory;

pub use integrator::{integrate, DampingModel, IntegrationProfile, Integrator};
#[cfg(feature = "parallel")]
pub use parallel::ParallelIntegrator;
pub use trajectory::{create_shell_ejection, launch_projectile};
