use std::time::{Duration, Instant};

/// Timing and population data for the most recent `PhysicsWorld::update`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameProfile {
    pub integrator_time: Duration,
    pub collision_time: Duration,
    pub total_frame_time: Duration,

    pub ticks: u32,
    pub body_count: usize,
    pub ground_contacts: usize,
}

impl FrameProfile {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "physics frame: {} ticks, {} bodies, {} ground contacts, {:.2} ms",
            self.ticks,
            self.body_count,
            self.ground_contacts,
            self.total_frame_time.as_secs_f32() * 1000.0
        );
        log::info!(
            "  integrate {:.2} ms ({:.1}%), ground {:.2} ms ({:.1}%)",
            self.integrator_time.as_secs_f32() * 1000.0,
            (self.integrator_time.as_micros() as f32 / total_us) * 100.0,
            self.collision_time.as_secs_f32() * 1000.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

/// Adds the lifetime of the guard to `output`.
pub struct ScopedTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
