use rayon::prelude::*;

use crate::{
    config::PhysicsConfig,
    core::body::{Body, BodyKind, TrackedBody},
    dynamics::integrator::Integrator,
    utils::allocator::Arena,
};

/// Parallel integrator using Rayon for data-parallel updates.
///
/// Every body is handed to exactly one worker as a disjoint `&mut`, and each
/// call joins all workers before returning. Callers must not start the next
/// tick (or drain the accumulator further) until the call has returned.
#[derive(Debug, Clone)]
pub struct ParallelIntegrator {
    integrator: Integrator,
}

impl ParallelIntegrator {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            integrator: Integrator::new(config),
        }
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// Advances a homogeneous population (e.g. one particle emitter's pool).
    pub fn step(&self, bodies: &mut [Body], kind: BodyKind, dt: f32) {
        bodies
            .par_iter_mut()
            .for_each(|body| self.integrator.integrate_kind(body, kind, dt));
    }

    /// Advances every live body in `arena` under its own category.
    pub fn step_arena(&self, arena: &mut Arena<TrackedBody>, dt: f32) {
        arena.slots_mut().par_iter_mut().for_each(|slot| {
            if let Some(tracked) = slot.as_mut() {
                tracked.previous_position = tracked.state.position;
                self.integrator
                    .integrate_kind(&mut tracked.state, tracked.kind, dt);
            }
        });
    }
}
