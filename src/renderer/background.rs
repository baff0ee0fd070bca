//! Sky, ground and ambience

use std::f32::consts::{PI, TAU};

use super::palette;
use super::surface::Surface;
use crate::sim::{Environment, Viewport};

/// Sky gradient, sun, and the drifting cloud field
pub fn draw_sky(surface: &mut impl Surface, view: &Viewport, env: &Environment) {
    let (w, h) = (view.width, view.height);

    surface.set_fill_linear_gradient(
        0.0,
        0.0,
        0.0,
        h,
        &[
            (0.0, palette::SKY_TOP),
            (0.6, palette::SKY_HORIZON),
            (1.0, palette::SAND),
        ],
    );
    surface.fill_rect(0.0, 0.0, w, h);

    draw_sun(surface, w * 0.82, h * 0.18);

    surface.set_fill(palette::CLOUD);
    for cloud in &env.clouds {
        draw_cloud(surface, cloud.x, cloud.y, cloud.size);
    }
}

fn draw_sun(surface: &mut impl Surface, x: f32, y: f32) {
    let radius = 36.0;
    let halo = radius * 2.2;
    surface.set_fill_radial_gradient(
        x,
        y,
        0.0,
        x,
        y,
        halo,
        &[(0.0, palette::SUN_HALO), (1.0, palette::SUN_HALO_EDGE)],
    );
    surface.begin_path();
    surface.arc(x, y, halo, 0.0, TAU);
    surface.fill();

    surface.set_fill(palette::SUN);
    surface.begin_path();
    surface.arc(x, y, radius, 0.0, TAU);
    surface.fill();
}

/// Basic cloud silhouette from overlapping arcs
fn draw_cloud(surface: &mut impl Surface, x: f32, y: f32, size: f32) {
    let radius = size * 0.3;
    surface.begin_path();
    surface.arc(x, y, radius, PI * 0.5, PI * 1.5);
    surface.arc(x + radius, y - radius, radius, PI, 0.0);
    surface.arc(x + radius * 2.0, y - radius, radius, PI, 0.0);
    surface.arc(x + radius * 3.0, y, radius, PI * 1.5, PI * 0.5);
    surface.close_path();
    surface.fill();
}

/// Ground band with shading and track lines
pub fn draw_ground(surface: &mut impl Surface, view: &Viewport) {
    let (w, h) = (view.width, view.height);
    let top = view.ground_y;

    surface.set_fill(palette::SAND);
    surface.fill_rect(0.0, top, w, h - top);

    surface.set_fill_linear_gradient(
        0.0,
        top,
        0.0,
        h,
        &[
            (0.0, palette::GROUND_SHADE_NEAR),
            (1.0, palette::GROUND_SHADE_FAR),
        ],
    );
    surface.fill_rect(0.0, top, w, h - top);

    surface.set_stroke(palette::TRACK_LINE);
    surface.set_line_width(2.0);
    for p in [0.72, 0.8, 0.88] {
        let y = top + (h - top) * (p - 0.7);
        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(w, y);
        surface.stroke();
    }
}

/// Soft edge-darkening pass over the finished frame
pub fn draw_vignette(surface: &mut impl Surface, view: &Viewport) {
    let (w, h) = (view.width, view.height);
    surface.set_fill_radial_gradient(
        w / 2.0,
        h * 0.55,
        w.min(h) * 0.25,
        w / 2.0,
        h / 2.0,
        w.max(h) * 0.75,
        &[
            (0.0, palette::VIGNETTE_INNER),
            (1.0, palette::VIGNETTE_OUTER),
        ],
    );
    surface.fill_rect(0.0, 0.0, w, h);
}
