//! Procedural character figure
//!
//! Pose is a pure function of body state and rope phase: leg spread and
//! torso lean follow the phase, crouch compresses the silhouette, and the
//! head rides the smoothed bob offset. The blink is a deterministic
//! function of elapsed time, not a random event.

use std::f32::consts::{PI, TAU};

use super::palette;
use super::surface::Surface;
use crate::sim::CharacterBody;

/// Ground contact shadow, squashed by fall speed and crouch
pub fn draw_shadow(surface: &mut impl Surface, body: &CharacterBody, ground_y: f32) {
    let squash = (1.0 + body.vy.abs() * 0.05 + body.crouch * 0.6).min(1.3);
    surface.set_fill(palette::SHADOW);
    surface.begin_path();
    surface.ellipse(body.pos.x, ground_y + 14.0, 52.0 * squash, 14.0 * squash);
    surface.fill();
}

/// The figure itself, drawn feet-up so later parts overlap earlier ones
pub fn draw_body(surface: &mut impl Surface, body: &CharacterBody, phase: f32, elapsed: f32) {
    let (x, y) = (body.pos.x, body.pos.y);
    let crouch = body.crouch;
    let lean = phase.sin() * 6.0;
    let bob = body.head_bob;

    // legs
    let leg_spread = 12.0 + phase.sin().abs() * 10.0 + crouch * 8.0;
    let leg_bend = 18.0 * crouch;
    surface.set_line_width(10.0);
    surface.set_round_caps();
    surface.set_stroke(palette::SHORTS);
    surface.begin_path();
    surface.move_to(x - leg_spread, y + 44.0 - leg_bend * 0.2);
    surface.line_to(x - leg_spread, y + 86.0 - leg_bend);
    surface.move_to(x + leg_spread, y + 44.0 - leg_bend * 0.2);
    surface.line_to(x + leg_spread, y + 86.0 - leg_bend);
    surface.stroke();

    // shorts
    surface.set_fill(palette::SHORTS);
    surface.fill_rect(x - 25.0, y + 12.0 - leg_bend * 0.3, 50.0, 32.0);

    // torso, arms and head share a leaning frame
    let torso_height = 52.0 - crouch * 10.0;
    surface.save();
    surface.translate(x, y - 32.0 - crouch * 8.0);
    surface.rotate(lean * PI / 360.0);

    surface.set_fill(palette::SHIRT);
    surface.begin_path();
    surface.round_rect(-27.0, -10.0, 54.0, torso_height, 12.0);
    surface.fill();

    // arms track the rope angle with a fixed swing offset
    let arm_length = 54.0 - crouch * 8.0;
    let shoulder = 26.0;
    let swing = PI * 0.07;
    let angle_left = phase + swing;
    let angle_right = phase - swing;

    surface.set_stroke(palette::SKIN);
    surface.set_line_width(9.0);
    surface.begin_path();
    surface.move_to(-shoulder, -6.0);
    surface.line_to(
        -shoulder + angle_left.cos() * arm_length,
        -6.0 + angle_left.sin() * arm_length,
    );
    surface.move_to(shoulder, -6.0);
    surface.line_to(
        shoulder + angle_right.cos() * arm_length,
        -6.0 + angle_right.sin() * arm_length,
    );
    surface.stroke();

    // head
    let head_y = -32.0 - torso_height + bob;
    surface.set_fill(palette::SKIN);
    surface.begin_path();
    surface.arc(0.0, head_y, 24.0, 0.0, TAU);
    surface.fill();

    // hair
    surface.set_fill(palette::HAIR);
    surface.begin_path();
    surface.arc(0.0, head_y - 6.0, 23.0, PI, 0.0);
    surface.fill();
    surface.begin_path();
    surface.arc(8.0, head_y - 11.0, 8.0, 0.0, TAU);
    surface.fill();

    // eyes, collapsing to a sliver inside the periodic blink window
    surface.set_fill(palette::EYES);
    let blink = if blink_closed(elapsed) { 0.2 } else { 1.0 };
    surface.begin_path();
    surface.arc(-7.0, head_y - 3.0, 3.0 * blink, 0.0, TAU);
    surface.arc(7.0, head_y - 3.0, 3.0 * blink, 0.0, TAU);
    surface.fill();

    // smile
    surface.set_stroke(palette::SMILE);
    surface.set_line_width(2.0);
    surface.begin_path();
    surface.arc(0.0, head_y + 7.0, 8.0, 0.0, PI);
    surface.stroke();

    surface.restore();
}

/// Narrow periodic window where the eyes close
pub fn blink_closed(elapsed: f32) -> bool {
    ((elapsed * 2.2).sin() + 1.0) * 0.5 < 0.08
}

/// One-off landing dust, drawn only on frames where the body just settled
pub fn draw_dust(surface: &mut impl Surface, body: &CharacterBody, ground_y: f32) {
    if !body.just_settled() {
        return;
    }
    surface.set_fill(palette::DUST);
    surface.begin_path();
    surface.ellipse(body.pos.x - 26.0, ground_y + 6.0, 14.0, 4.0);
    surface.ellipse(body.pos.x + 26.0, ground_y + 6.0, 14.0, 4.0);
    surface.fill();
}
