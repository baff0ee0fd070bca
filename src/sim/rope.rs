//! Rope phase and geometry
//!
//! The rope owns the Phase: a single unbounded angle in radians that drives
//! both the visual rope shape and the jump timing. Two geometry variants
//! hang off the same phase:
//! - `Parametric`: closed-form arc through the hand anchors and a
//!   phase-displaced midpoint, no per-point state
//! - `Strand`: a chain of Verlet mass points relaxed toward phase-derived
//!   targets under distance constraints
//!
//! Consumers query geometry through [`RopeGeometry`]; the jump controller
//! only ever reads the normalized phase.

use glam::Vec2;

use super::strand::{Strand, StrandPoint};
use crate::consts::*;
use crate::normalize_phase;
use crate::settings::RopeVariant;

/// Geometry variant, selected at startup
#[derive(Debug)]
pub enum RopeKind {
    Parametric,
    Strand(Strand),
}

/// The rotating rope: phase plus geometry
#[derive(Debug)]
pub struct RopeModel {
    phase: f32,
    kind: RopeKind,
}

/// Snapshot of the rope's current shape, common query for the renderer
#[derive(Debug)]
pub enum RopeGeometry<'a> {
    /// Two quadratic curves: left hand -> bottom -> right hand, control
    /// points displaced from `mid`
    Arc {
        left_hand: Vec2,
        right_hand: Vec2,
        mid: Vec2,
        bottom: Vec2,
    },
    /// Mass-point chain; z < 0 is behind the character
    Strand { points: &'a [StrandPoint] },
}

impl RopeModel {
    /// Build a rope of the requested variant with hands at `hip`-relative
    /// anchors. Phase starts at pi/2: rope hanging at the character's back.
    pub fn new(variant: RopeVariant, hip: Vec2) -> Self {
        let phase = std::f32::consts::FRAC_PI_2;
        let kind = match variant {
            RopeVariant::Parametric => RopeKind::Parametric,
            RopeVariant::Strand => {
                let (left, right) = hand_anchors(hip);
                RopeKind::Strand(Strand::new(left, right))
            }
        };
        Self { phase, kind }
    }

    /// Advance the phase by `dt * speed * ANGULAR_SCALE`. The accumulator is
    /// left unbounded; window tests reduce mod 2*pi.
    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.phase += dt * speed * ANGULAR_SCALE;
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn normalized_phase(&self) -> f32 {
        normalize_phase(self.phase)
    }

    #[inline]
    pub fn variant(&self) -> RopeVariant {
        match self.kind {
            RopeKind::Parametric => RopeVariant::Parametric,
            RopeKind::Strand(_) => RopeVariant::Strand,
        }
    }

    /// Post-integration geometry update. The parametric arc is closed-form
    /// and needs none; the strand relaxes against the character's current
    /// hand positions.
    pub fn settle(&mut self, dt: f32, hip: Vec2, ground_y: f32) {
        if let RopeKind::Strand(strand) = &mut self.kind {
            let (left, right) = hand_anchors(hip);
            strand.relax(dt, self.phase, left, right, ground_y);
        }
    }

    /// Rebuild geometry state for a new viewport. Phase is preserved; the
    /// strand is re-seeded at the new anchors rather than dragged across.
    pub fn rebuild(&mut self, hip: Vec2) {
        if let RopeKind::Strand(strand) = &mut self.kind {
            let (left, right) = hand_anchors(hip);
            *strand = Strand::new(left, right);
        }
    }

    /// Current shape for rendering
    pub fn geometry(&self, hip: Vec2) -> RopeGeometry<'_> {
        match &self.kind {
            RopeKind::Parametric => {
                let (left_hand, right_hand) = hand_anchors(hip);
                let (sin, cos) = self.phase.sin_cos();
                let mid = hip + Vec2::new(cos, sin) * ROPE_RADIUS * ROPE_MID_PULL;
                let (bsin, bcos) = (self.phase + std::f32::consts::FRAC_PI_2).sin_cos();
                let bottom = hip + Vec2::new(bcos, bsin) * ROPE_RADIUS;
                RopeGeometry::Arc {
                    left_hand,
                    right_hand,
                    mid,
                    bottom,
                }
            }
            RopeKind::Strand(strand) => RopeGeometry::Strand {
                points: strand.points(),
            },
        }
    }
}

/// Hand anchor positions for a given hip position
#[inline]
pub fn hand_anchors(hip: Vec2) -> (Vec2, Vec2) {
    (
        hip + Vec2::new(-HAND_OFFSET_X, -HAND_OFFSET_Y),
        hip + Vec2::new(HAND_OFFSET_X, -HAND_OFFSET_Y),
    )
}
