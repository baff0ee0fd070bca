//! Procedural 2D rendering
//!
//! `draw` is a pure function of the simulation state: it mutates nothing
//! but the surface it is handed. Draw order is significant for occlusion:
//! sky, rope-behind, ground, shadow, figure, rope-in-front, vignette.

pub mod background;
pub mod figure;
pub mod rope;
pub mod surface;

pub use surface::Surface;

use crate::sim::{RopeGeometry, SimState};

/// Palette (CSS color strings, the form the canvas backend consumes)
pub mod palette {
    pub const SKY_TOP: &str = "#e7f1ff";
    pub const SKY_HORIZON: &str = "#c9defa";
    pub const SAND: &str = "#d6c199";
    pub const SUN: &str = "#ffd686";
    pub const SUN_HALO: &str = "rgba(255, 214, 130, 0.9)";
    pub const SUN_HALO_EDGE: &str = "rgba(255, 214, 130, 0)";
    pub const CLOUD: &str = "rgba(255,255,255,0.9)";
    pub const GROUND_SHADE_NEAR: &str = "rgba(0,0,0,0.05)";
    pub const GROUND_SHADE_FAR: &str = "rgba(0,0,0,0.12)";
    pub const TRACK_LINE: &str = "rgba(255,255,255,0.4)";
    pub const VIGNETTE_INNER: &str = "rgba(0,0,0,0)";
    pub const VIGNETTE_OUTER: &str = "rgba(17,30,60,0.07)";

    pub const SHADOW: &str = "rgba(0,0,0,0.16)";
    pub const SHORTS: &str = "#2d3e6f";
    pub const SHIRT: &str = "#5c8ef2";
    pub const SKIN: &str = "#f1c27d";
    pub const HAIR: &str = "#2c1b10";
    pub const EYES: &str = "#152235";
    pub const SMILE: &str = "#b5722d";
    pub const DUST: &str = "rgba(255,255,255,0.25)";

    pub const ROPE: &str = "#e0653a";
    pub const ROPE_GLOW: &str = "rgba(255, 150, 100, 0.35)";
    pub const ROPE_BACK: &str = "#a84a2a";
    pub const HANDLE: &str = "#1f3b75";
}

/// Render one frame of the current state
pub fn draw(state: &SimState, surface: &mut impl Surface) {
    let view = &state.viewport;
    let body = &state.body;
    let phase = state.rope.phase();

    background::draw_sky(surface, view, &state.environment);

    let geometry = state.rope.geometry(body.pos);
    if let RopeGeometry::Strand { points } = &geometry {
        rope::draw_strand_layer(surface, points, rope::Layer::Behind);
    }

    background::draw_ground(surface, view);
    figure::draw_shadow(surface, body, view.ground_y);
    figure::draw_body(surface, body, phase, state.elapsed);
    figure::draw_dust(surface, body, view.ground_y);

    match &geometry {
        RopeGeometry::Arc {
            left_hand,
            right_hand,
            mid,
            bottom,
        } => rope::draw_parametric(surface, *left_hand, *right_hand, *mid, *bottom),
        RopeGeometry::Strand { points } => {
            rope::draw_strand_layer(surface, points, rope::Layer::Front);
        }
    }

    background::draw_vignette(surface, view);
}

#[cfg(test)]
mod tests {
    use super::surface::recording::{Op, RecordingSurface};
    use super::*;
    use crate::settings::{RopeVariant, Settings};
    use crate::sim::{TickInput, tick};

    fn state_for(variant: RopeVariant) -> SimState {
        let settings = Settings {
            rope_variant: variant,
            ..Settings::default()
        };
        SimState::new(&settings, false, 800.0, 600.0, 1.0, 3)
    }

    #[test]
    fn test_draw_emits_a_frame() {
        let state = state_for(RopeVariant::Parametric);
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        assert!(surface.count(&Op::Fill) > 5);
        assert!(surface.count(&Op::Stroke) > 3);
        // leaning frame balanced
        assert_eq!(surface.count(&Op::Save), surface.count(&Op::Restore));
    }

    #[test]
    fn test_parametric_rope_draws_after_figure() {
        let state = state_for(RopeVariant::Parametric);
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        let rope_pos = surface
            .position(|op| *op == Op::SetStroke(palette::ROPE.into()))
            .expect("rope stroked");
        let shirt_pos = surface
            .position(|op| *op == Op::SetFill(palette::SHIRT.into()))
            .expect("figure drawn");
        assert!(rope_pos > shirt_pos, "parametric rope always in front");
    }

    #[test]
    fn test_strand_back_layer_draws_before_figure() {
        let mut state = state_for(RopeVariant::Strand);
        // settle and swing until some points sit behind the depth plane
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        }
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        let shirt_pos = surface
            .position(|op| *op == Op::SetFill(palette::SHIRT.into()))
            .expect("figure drawn");
        if let Some(back_pos) =
            surface.position(|op| *op == Op::SetStroke(palette::ROPE_BACK.into()))
        {
            assert!(back_pos < shirt_pos, "back layer behind the figure");
        }
    }

    #[test]
    fn test_draw_does_not_mutate_state() {
        let state = state_for(RopeVariant::Parametric);
        let phase = state.rope.phase();
        let body_y = state.body.pos.y;
        let cloud_x = state.environment.clouds[0].x;

        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        draw(&state, &mut surface);

        assert_eq!(state.rope.phase(), phase);
        assert_eq!(state.body.pos.y, body_y);
        assert_eq!(state.environment.clouds[0].x, cloud_x);
    }
}
