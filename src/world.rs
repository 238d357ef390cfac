use std::time::Instant;

use glam::Vec2;

use crate::{
    collision::ground::GroundPlane,
    config::PhysicsConfig,
    core::{
        body::{Body, BodyKind, TrackedBody},
        clock::SimulationClock,
    },
    dynamics::integrator::Integrator,
    error::Result,
    utils::{
        allocator::{Arena, BodyHandle},
        logging::{warn_if_frame_budget_exceeded, TickSpan},
        math::interpolate_position,
        profiling::{self, FrameProfile},
    },
};

#[cfg(feature = "parallel")]
use crate::dynamics::parallel::ParallelIntegrator;

/// Default wall-clock budget for one frame's physics work (ms).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 4.0;

/// Outcome of one [`PhysicsWorld::update`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub ticks: u32,
    pub ground_contacts: usize,
    pub alpha: f64,
}

/// Reference host: owns a clock and a body arena and, per tick, integrates every
/// body under its category and then resolves it against the ground plane.
pub struct PhysicsWorld {
    bodies: Arena<TrackedBody>,
    config: PhysicsConfig,
    clock: SimulationClock,
    integrator: Integrator,
    #[cfg(feature = "parallel")]
    parallel: ParallelIntegrator,
    ground: Option<GroundPlane>,
    paused: bool,
    parallel_enabled: bool,
    frame_budget_ms: f32,
    profile: FrameProfile,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl PhysicsWorld {
    /// Builds a world from `config`. A table that fails
    /// [`PhysicsConfig::validate`] falls back to the defaults; use
    /// [`try_new`](Self::try_new) to reject bad input instead.
    pub fn new(config: PhysicsConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{err}; using default physics config");
                PhysicsConfig::default()
            }
        };

        Self {
            bodies: Arena::new(),
            clock: SimulationClock::new(&config),
            integrator: Integrator::new(config),
            #[cfg(feature = "parallel")]
            parallel: ParallelIntegrator::new(config),
            ground: None,
            paused: false,
            parallel_enabled: false,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            profile: FrameProfile::default(),
            config,
        }
    }

    /// Builds a world after validating every constant in `config`.
    pub fn try_new(config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn initialize(&mut self, now: f64) {
        self.clock.initialize(now);
        self.paused = false;
    }

    pub fn reset(&mut self, now: f64) {
        self.clock.reset(now);
    }

    /// Stops consuming time; frames delivered while paused run no ticks.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes at `now` without replaying the paused interval.
    pub fn resume(&mut self, now: f64) {
        self.clock.reset(now);
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_ground(&mut self, height: Option<f32>) {
        self.ground = height.map(GroundPlane::new);
    }

    pub fn ground(&self) -> Option<f32> {
        self.ground.map(|plane| plane.height)
    }

    /// Enables or disables parallel integration. Ignored without the `parallel` feature.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled && cfg!(feature = "parallel");
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    pub fn set_frame_budget_ms(&mut self, budget_ms: f32) {
        self.frame_budget_ms = budget_ms;
    }

    /// Timing of the most recent update.
    pub fn profile(&self) -> &FrameProfile {
        &self.profile
    }

    pub fn spawn(&mut self, body: Body, kind: BodyKind) -> BodyHandle {
        self.bodies.insert(TrackedBody::new(body, kind))
    }

    /// Removes a body on its owner's request; stale handles return `None`.
    pub fn despawn(&mut self, handle: BodyHandle) -> Option<Body> {
        self.bodies.remove(handle).map(|tracked| tracked.state)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle).map(|tracked| &tracked.state)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle).map(|tracked| &mut tracked.state)
    }

    pub fn kind(&self, handle: BodyHandle) -> Option<BodyKind> {
        self.bodies.get(handle).map(|tracked| tracked.kind)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies
            .iter()
            .map(|(handle, tracked)| (handle, &tracked.state))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn interpolation_alpha(&self) -> f64 {
        self.clock.interpolation_alpha()
    }

    pub fn fixed_timestep(&self) -> f64 {
        self.clock.fixed_timestep()
    }

    /// Render position between the last two ticks, using the current alpha.
    pub fn interpolated_position(&self, handle: BodyHandle) -> Option<Vec2> {
        let alpha = self.clock.interpolation_alpha() as f32;
        self.bodies.get(handle).map(|tracked| {
            interpolate_position(tracked.previous_position, tracked.state.position, alpha)
        })
    }

    /// Feeds one frame timestamp (seconds) and runs every tick it unlocks.
    pub fn update(&mut self, now: f64) -> StepReport {
        if self.paused {
            return StepReport {
                alpha: self.clock.interpolation_alpha(),
                ..StepReport::default()
            };
        }

        let frame_start = Instant::now();
        let mut profile = FrameProfile::default();

        let mut tick_index = self.clock.total_ticks();
        let ticks = self.clock.update(now, |dt| {
            let dt = dt as f32;
            let _span = TickSpan::new(tick_index, self.bodies.len());
            tick_index += 1;
            {
                let _timer = profiling::ScopedTimer::new(&mut profile.integrator_time);
                #[cfg(feature = "parallel")]
                {
                    if self.parallel_enabled {
                        self.parallel.step_arena(&mut self.bodies, dt);
                    } else {
                        integrate_sequential(&mut self.bodies, &self.integrator, dt);
                    }
                }
                #[cfg(not(feature = "parallel"))]
                integrate_sequential(&mut self.bodies, &self.integrator, dt);
            }

            if let Some(ground) = self.ground {
                let _timer = profiling::ScopedTimer::new(&mut profile.collision_time);
                for tracked in self.bodies.values_mut() {
                    if ground.resolve(&mut tracked.state, &self.config) {
                        profile.ground_contacts += 1;
                    }
                }
            }
        });

        profile.ticks = ticks;
        profile.body_count = self.bodies.len();
        profile.total_frame_time = frame_start.elapsed();
        warn_if_frame_budget_exceeded(profile.total_frame_time, self.frame_budget_ms, ticks);
        log::trace!(
            "world::update t={now:.4} ticks={ticks} bodies={} alpha={:.3}",
            profile.body_count,
            self.clock.interpolation_alpha()
        );
        self.profile = profile;

        StepReport {
            ticks,
            ground_contacts: profile.ground_contacts,
            alpha: self.clock.interpolation_alpha(),
        }
    }
}

fn integrate_sequential(bodies: &mut Arena<TrackedBody>, integrator: &Integrator, dt: f32) {
    for tracked in bodies.values_mut() {
        tracked.previous_position = tracked.state.position;
        integrator.integrate_kind(&mut tracked.state, tracked.kind, dt);
    }
}
