//! Character body physics and jump timing
//!
//! The body integrates with semi-implicit Euler in per-frame velocity units
//! (`vy += GRAVITY * dt; y += vy`), matching the hand-tuned feel the jump
//! impulse and gravity constants were calibrated against. Crouch and head
//! bob are smoothing targets, never assigned directly.

use glam::Vec2;

use crate::consts::*;
use crate::lerp;

/// Vertical state of the figure
#[derive(Debug, Clone, Copy)]
pub struct CharacterBody {
    /// Hip position; x is fixed per resize, y integrates
    pub pos: Vec2,
    /// Vertical velocity in per-frame units (positive = down)
    pub vy: f32,
    pub grounded: bool,
    /// Crouch amount in [0, 1], smoothed toward its target
    pub crouch: f32,
    /// Vertical head overshoot, smoothed toward -vy * HEAD_BOB_SCALE
    pub head_bob: f32,
}

impl CharacterBody {
    /// Standing at rest on the ground line
    pub fn standing_at(stand_pos: Vec2) -> Self {
        Self {
            pos: stand_pos,
            vy: 0.0,
            grounded: true,
            crouch: 0.0,
            head_bob: 0.0,
        }
    }

    /// Gravity, position, pose smoothing, and the landing clamp.
    /// `stand_y` is the hip height when standing on the ground.
    pub fn integrate(&mut self, dt: f32, phase_norm: f32, stand_y: f32) {
        let crouch_target = if self.grounded && in_window(phase_norm, CROUCH_WINDOW) {
            CROUCH_TARGET
        } else {
            0.0
        };
        self.crouch = lerp(self.crouch, crouch_target, CROUCH_RATE * dt);

        self.vy += GRAVITY * dt;
        self.pos.y += self.vy;

        self.head_bob = lerp(self.head_bob, -self.vy * HEAD_BOB_SCALE, HEAD_BOB_RATE * dt);

        if self.pos.y > stand_y {
            self.pos.y = stand_y;
            self.vy = 0.0;
            self.grounded = true;
        }
    }

    /// True on the frames where the landing dust puff should draw
    pub fn just_settled(&self) -> bool {
        self.grounded && self.vy.abs() < 0.01 && self.crouch < 0.1
    }
}

/// Grounded/Airborne state machine.
///
/// The Grounded -> Airborne transition fires when the normalized phase enters
/// the underfoot window; requiring `grounded` as a precondition makes the
/// latch: at most one impulse per window pass, because the flag only comes
/// back after the Airborne -> Grounded clamp in `CharacterBody::integrate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpController;

impl JumpController {
    /// Fire the jump impulse if the rope is entering the underfoot window
    /// while the body is grounded. The impulse scales slightly with rope
    /// speed so jump height visually tracks rotation rate.
    pub fn evaluate(&mut self, phase_norm: f32, body: &mut CharacterBody, rope_speed: f32) {
        if body.grounded && in_window(phase_norm, JUMP_WINDOW) {
            body.vy = JUMP_IMPULSE * (0.95 + rope_speed * 0.06);
            body.grounded = false;
        }
    }
}

/// Test a normalized phase against a window given as fractions of pi
#[inline]
fn in_window(phase_norm: f32, window: (f32, f32)) -> bool {
    let (lo, hi) = window;
    phase_norm > lo * std::f32::consts::PI && phase_norm < hi * std::f32::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const DT: f32 = 1.0 / 60.0;

    fn grounded_body() -> CharacterBody {
        CharacterBody::standing_at(Vec2::new(400.0, 470.0))
    }

    #[test]
    fn test_jump_fires_in_window() {
        let mut body = grounded_body();
        let mut jump = JumpController;
        jump.evaluate(PI, &mut body, 1.0);
        assert!(!body.grounded);
        assert!(body.vy < 0.0);
    }

    #[test]
    fn test_no_jump_outside_window() {
        let mut body = grounded_body();
        let mut jump = JumpController;
        jump.evaluate(0.2, &mut body, 1.0);
        assert!(body.grounded);
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn test_at_most_one_impulse_per_pass() {
        let mut body = grounded_body();
        let mut jump = JumpController;

        jump.evaluate(PI, &mut body, 1.0);
        let vy_after_first = body.vy;

        // Still inside the window on later frames: no second impulse
        jump.evaluate(PI * 1.05, &mut body, 1.0);
        jump.evaluate(PI * 1.1, &mut body, 1.0);
        assert_eq!(body.vy, vy_after_first);
        assert!(!body.grounded);
    }

    #[test]
    fn test_impulse_scales_with_speed() {
        let mut slow = grounded_body();
        let mut fast = grounded_body();
        let mut jump = JumpController;
        jump.evaluate(PI, &mut slow, 0.5);
        jump.evaluate(PI, &mut fast, 3.0);
        assert!(fast.vy < slow.vy, "faster rope, stronger impulse");
    }

    #[test]
    fn test_integrate_returns_to_ground() {
        let stand_y = 470.0;
        let mut body = grounded_body();
        let mut jump = JumpController;
        jump.evaluate(PI, &mut body, 1.0);

        let mut landed = false;
        for _ in 0..240 {
            body.integrate(DT, 0.0, stand_y);
            assert!(body.pos.y <= stand_y + 1e-4, "never below the ground line");
            if body.grounded {
                landed = true;
                break;
            }
        }
        assert!(landed, "jump arc must come back down within 4 seconds");
        assert_eq!(body.pos.y, stand_y);
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn test_crouch_approaches_target_inside_window() {
        let mut body = grounded_body();
        for _ in 0..120 {
            body.integrate(DT, PI, body.pos.y);
        }
        assert!((body.crouch - CROUCH_TARGET).abs() < 0.05);

        // Leaving the window relaxes it back toward zero
        for _ in 0..120 {
            body.integrate(DT, 0.0, body.pos.y);
        }
        assert!(body.crouch < 0.05);
    }

    #[test]
    fn test_head_bob_tracks_velocity() {
        let stand_y = 470.0;
        let mut body = grounded_body();
        body.vy = JUMP_IMPULSE;
        body.grounded = false;
        for _ in 0..10 {
            body.integrate(DT, 0.0, stand_y);
        }
        // Rising fast: bob should have swung positive (opposite the velocity)
        assert!(body.head_bob > 0.0);
    }
}
