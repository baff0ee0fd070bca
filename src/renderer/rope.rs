//! Rope drawing
//!
//! The parametric arc renders as two quadratic curves with a wide glow pass
//! underneath, always in front of the character. The strand renders as
//! polyline runs split by depth: points with negative z go behind the
//! character, the rest in front.

use super::palette;
use super::surface::Surface;
use crate::consts::ROPE_THICKNESS;
use crate::sim::StrandPoint;
use glam::Vec2;

/// Depth layer of a strand pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Behind,
    Front,
}

/// Closed-loop arc: hand -> bottom -> other hand, glow then body, plus the
/// short handle strokes below the grips
pub fn draw_parametric(
    surface: &mut impl Surface,
    left_hand: Vec2,
    right_hand: Vec2,
    mid: Vec2,
    bottom: Vec2,
) {
    surface.set_round_caps();

    surface.set_stroke(palette::ROPE_GLOW);
    surface.set_line_width(ROPE_THICKNESS * 2.1);
    stroke_loop(surface, left_hand, right_hand, mid, bottom, 12.0);

    surface.set_stroke(palette::ROPE);
    surface.set_line_width(ROPE_THICKNESS);
    stroke_loop(surface, left_hand, right_hand, mid, bottom, 10.0);

    surface.set_stroke(palette::HANDLE);
    surface.set_line_width(ROPE_THICKNESS);
    surface.begin_path();
    surface.move_to(left_hand.x, left_hand.y);
    surface.line_to(left_hand.x, left_hand.y + 12.0);
    surface.move_to(right_hand.x, right_hand.y);
    surface.line_to(right_hand.x, right_hand.y + 12.0);
    surface.stroke();
}

fn stroke_loop(
    surface: &mut impl Surface,
    left_hand: Vec2,
    right_hand: Vec2,
    mid: Vec2,
    bottom: Vec2,
    spread: f32,
) {
    surface.begin_path();
    surface.move_to(left_hand.x, left_hand.y);
    surface.quadratic_to(mid.x - spread, mid.y, bottom.x, bottom.y);
    surface.quadratic_to(mid.x + spread, mid.y, right_hand.x, right_hand.y);
    surface.stroke();
}

/// One depth layer of the strand: contiguous runs of points on the given
/// side of the depth plane, stroked as polylines. Width swells slightly
/// with z so the near side reads closer.
pub fn draw_strand_layer(surface: &mut impl Surface, points: &[StrandPoint], layer: Layer) {
    surface.set_round_caps();
    surface.set_stroke(match layer {
        Layer::Behind => palette::ROPE_BACK,
        Layer::Front => palette::ROPE,
    });

    let mut run_start = None;
    for i in 0..=points.len() {
        let inside = points.get(i).is_some_and(|p| in_layer(p, layer));
        match (run_start, inside) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                stroke_run(surface, &points[start..i]);
                run_start = None;
            }
            _ => {}
        }
    }
}

fn in_layer(p: &StrandPoint, layer: Layer) -> bool {
    match layer {
        Layer::Behind => p.pos.z < 0.0,
        Layer::Front => p.pos.z >= 0.0,
    }
}

fn stroke_run(surface: &mut impl Surface, run: &[StrandPoint]) {
    if run.len() < 2 {
        return;
    }
    let mean_z = run.iter().map(|p| p.pos.z).sum::<f32>() / run.len() as f32;
    surface.set_line_width(ROPE_THICKNESS * (1.0 + mean_z / 600.0));

    surface.begin_path();
    surface.move_to(run[0].pos.x, run[0].pos.y);
    for p in &run[1..] {
        surface.line_to(p.pos.x, p.pos.y);
    }
    surface.stroke();
}
