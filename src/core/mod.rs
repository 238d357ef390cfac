//! Core types describing simulated bodies and simulation time.

pub mod body;
pub mod clock;

pub use body::{Body, BodyKind, TrackedBody};
pub use clock::SimulationClock;
