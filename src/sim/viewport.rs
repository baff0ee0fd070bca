//! Logical viewport and derived baselines
//!
//! All positions the rest of the simulation treats as fixed (ground line,
//! character anchor) derive from here and are recomputed wholesale on
//! resize, never carried over from the previous size.

use glam::Vec2;

use crate::consts::{GROUND_MARGIN, STAND_HEIGHT};

/// Logical drawing dimensions plus derived baselines
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Logical width in drawing units (>= 1)
    pub width: f32,
    /// Logical height in drawing units (>= 1)
    pub height: f32,
    /// Physical pixels per logical unit
    pub device_pixel_ratio: f32,
    /// Y of the ground line the character lands on
    pub ground_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let mut vp = Self {
            width: 1.0,
            height: 1.0,
            device_pixel_ratio: 1.0,
            ground_y: 0.0,
        };
        vp.resize(width, height, device_pixel_ratio);
        vp
    }

    /// Recompute everything from the new physical size. Degenerate sizes
    /// (zero or negative, e.g. a collapsed container mid-layout) clamp to a
    /// 1x1 logical surface instead of poisoning downstream geometry.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        self.ground_y = self.height - GROUND_MARGIN;
    }

    /// Horizontal anchor of the character (viewport midline)
    #[inline]
    pub fn character_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Hip position when standing on the ground
    #[inline]
    pub fn stand_position(&self) -> Vec2 {
        Vec2::new(self.character_x(), self.ground_y - STAND_HEIGHT)
    }
}
