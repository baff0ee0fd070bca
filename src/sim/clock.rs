//! Frame clock with bounded delta time
//!
//! Timestamps come from the host's frame callback (milliseconds). The delta
//! is capped so a stalled tab or a long resize cannot feed the physics a
//! step large enough to tunnel the character through the ground or blow up
//! the strand solver.

use crate::consts::MAX_FRAME_DT;

/// Wall-clock tick source producing clamped delta-seconds
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    last_ms: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Advance to `now_ms` and return the bounded delta in seconds.
    ///
    /// The first call after construction or `reset` returns 0.0 so a resume
    /// never replays the paused interval.
    pub fn step(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Drop the stale reference time. Call on resume so the next `step`
    /// starts from "now" instead of the instant the loop was paused.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
