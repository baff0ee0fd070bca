//! Simulation context
//!
//! `SimState` is the one mutable context object, owned by the host
//! application and passed by reference into `tick` and `draw`. Nothing in
//! the crate keeps simulation state in module-level statics.

use crate::consts::*;
use crate::settings::{RopeVariant, Settings};

use super::character::{CharacterBody, JumpController};
use super::environment::Environment;
use super::rope::RopeModel;
use super::viewport::Viewport;

/// Per-tick immutable configuration; mutated only by input events
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Rope rotation speed in user units per second, clamped to
    /// [SPEED_MIN, SPEED_MAX]
    pub rope_speed: f32,
    /// Host prefers reduced motion (sampled once at startup)
    pub reduced_motion: bool,
}

impl SimConfig {
    /// Startup configuration: the base speed less the reduced-motion
    /// delta when the host asks for it, clamped to the control bounds.
    pub fn startup(base_speed: f32, reduced_motion: bool) -> Self {
        let speed = if reduced_motion {
            base_speed - REDUCED_MOTION_DELTA
        } else {
            base_speed
        };
        Self {
            rope_speed: speed.clamp(SPEED_MIN, SPEED_MAX),
            reduced_motion,
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.rope_speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }
}

/// Complete simulation state
#[derive(Debug)]
pub struct SimState {
    pub config: SimConfig,
    pub running: bool,
    /// Elapsed simulated seconds; drives the deterministic blink
    pub elapsed: f32,
    pub viewport: Viewport,
    pub rope: RopeModel,
    pub body: CharacterBody,
    pub jump: JumpController,
    pub environment: Environment,
}

impl SimState {
    /// Build the full context for a viewport of the given logical size.
    /// `seed` only scatters the decorative cloud field; the simulation
    /// itself is deterministic.
    pub fn new(
        settings: &Settings,
        reduced_motion: bool,
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
        seed: u64,
    ) -> Self {
        let viewport = Viewport::new(width, height, device_pixel_ratio);
        let stand = viewport.stand_position();
        let rope = RopeModel::new(settings.rope_variant, stand);
        log::info!(
            "simulation ready: {:?} rope, {}x{} @ {}x",
            settings.rope_variant,
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio,
        );
        Self {
            config: SimConfig::startup(settings.speed, reduced_motion),
            running: true,
            elapsed: 0.0,
            viewport,
            rope,
            body: CharacterBody::standing_at(stand),
            jump: JumpController,
            environment: Environment::new(settings.rope_variant, seed),
        }
    }

    /// Recompute the viewport and every position derived from it. The
    /// character snaps back to the stand position at the new midline; the
    /// strand re-seeds at the new anchors.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.viewport.resize(width, height, device_pixel_ratio);
        let stand = self.viewport.stand_position();
        self.body.pos = stand;
        self.body.vy = 0.0;
        self.body.grounded = true;
        self.rope.rebuild(stand);
    }

    /// Hip height when standing on the ground line
    #[inline]
    pub fn stand_y(&self) -> f32 {
        self.viewport.stand_position().y
    }

    #[inline]
    pub fn rope_variant(&self) -> RopeVariant {
        self.rope.variant()
    }
}
