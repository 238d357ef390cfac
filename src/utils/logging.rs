use log::{log_enabled, trace, warn, Level};
use std::time::{Duration, Instant};

/// Trace guard around one fixed tick: logs the tick number and population on
/// entry and the tick's wall time on drop. Free when trace logging is off.
pub struct TickSpan {
    tick: u64,
    start: Option<Instant>,
}

impl TickSpan {
    pub fn new(tick: u64, bodies: usize) -> Self {
        let start = log_enabled!(Level::Trace).then(|| {
            trace!("tick {tick}: integrating {bodies} bodies");
            Instant::now()
        });
        Self { tick, start }
    }
}

impl Drop for TickSpan {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            trace!("tick {} done in {} µs", self.tick, start.elapsed().as_micros());
        }
    }
}

/// Warns when the physics work of one frame ate more than `budget_ms`.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32, ticks: u32) {
    let spent_ms = duration.as_secs_f32() * 1000.0;
    if spent_ms > budget_ms {
        warn!(
            "Physics frame exceeded budget: {:.2} ms > {:.2} ms over {} ticks",
            spent_ms, budget_ms, ticks
        );
    }
}
