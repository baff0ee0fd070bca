//! Rope Hop - a looping jump-rope animation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rope phase, strand relaxation, jump timing)
//! - `renderer`: Procedural 2D drawing against a `Surface` of canvas-style primitives
//! - `settings`: User preferences (rope variant, speed) with LocalStorage persistence
//! - `server`: Static file responder for local hosting (native only)

pub mod renderer;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod settings;
pub mod sim;

pub use settings::{RopeVariant, Settings};
pub use sim::{SimState, TickInput, tick};

/// Simulation tuning constants
pub mod consts {
    /// Upper bound on a single frame's delta time (seconds); large gaps from
    /// tab suspension or resize are clamped to this
    pub const MAX_FRAME_DT: f32 = 0.04;

    /// Rope angular advance per speed unit per second (radians)
    pub const ANGULAR_SCALE: f32 = 3.1;
    /// Rope swing radius (logical units)
    pub const ROPE_RADIUS: f32 = 120.0;
    /// Pull factor of the phase-displaced control midpoint
    pub const ROPE_MID_PULL: f32 = 0.08;
    /// Rope stroke thickness
    pub const ROPE_THICKNESS: f32 = 7.0;
    /// Hand anchor offsets relative to the hip
    pub const HAND_OFFSET_X: f32 = 26.0;
    pub const HAND_OFFSET_Y: f32 = 12.0;

    /// Speed control bounds and default
    pub const SPEED_MIN: f32 = 0.5;
    pub const SPEED_MAX: f32 = 3.0;
    pub const SPEED_DEFAULT: f32 = 1.4;
    /// Startup speed reduction when the host prefers reduced motion
    pub const REDUCED_MOTION_DELTA: f32 = 0.4;

    /// Downward acceleration (velocity units per second)
    pub const GRAVITY: f32 = 26.0;
    /// Base jump impulse (negative = up, in per-frame velocity units)
    pub const JUMP_IMPULSE: f32 = -12.5;
    /// Underfoot phase window, as fractions of pi
    pub const JUMP_WINDOW: (f32, f32) = (0.82, 1.18);
    /// Crouch anticipation window, a superset of the jump window
    pub const CROUCH_WINDOW: (f32, f32) = (0.70, 1.30);
    /// Crouch depth while bracing for a pass
    pub const CROUCH_TARGET: f32 = 0.42;
    /// Exponential approach rates for crouch and head bob
    pub const CROUCH_RATE: f32 = 6.0;
    pub const HEAD_BOB_RATE: f32 = 8.0;
    pub const HEAD_BOB_SCALE: f32 = 0.8;

    /// Ground baseline distance from the viewport bottom
    pub const GROUND_MARGIN: f32 = 90.0;
    /// Hip height above the ground baseline when standing
    pub const STAND_HEIGHT: f32 = 40.0;

    /// Constraint strand: segment count (one more mass point than this)
    pub const STRAND_SEGMENTS: usize = 25;
    /// Total strand length; rest length per link is this over the segment count
    pub const STRAND_LENGTH: f32 = 270.0;
    /// Distance-constraint passes per tick
    pub const STRAND_ITERATIONS: usize = 10;
    /// Verlet velocity retention per tick
    pub const STRAND_FRICTION: f32 = 0.98;
    /// Downward bias applied to interior points (units per second squared)
    pub const STRAND_GRAVITY: f32 = 220.0;
    /// Amplitude of the phase-driven swing target
    pub const STRAND_ARC: f32 = 110.0;
    /// Blend factor toward the phase target per tick
    pub const STRAND_PHASE_PULL: f32 = 0.18;
    /// Fraction of implied velocity kept (reversed) after a ground clamp
    pub const STRAND_GROUND_BOUNCE: f32 = 0.25;

    /// Cloud count for the parametric variant's backdrop
    pub const CLOUD_COUNT: usize = 5;
}

/// Reduce an unbounded phase angle to [0, 2*pi)
#[inline]
pub fn normalize_phase(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Linear interpolation with t clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_normalize_phase_wraps() {
        assert!((normalize_phase(TAU + 0.5) - 0.5).abs() < 1e-6);
        assert!((normalize_phase(-PI) - PI).abs() < 1e-5);
        assert!(normalize_phase(3.0 * TAU) < 1e-4);
    }

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    }
}
