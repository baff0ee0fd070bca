//! Constraint-relaxed rope strand
//!
//! An ordered chain of mass points joined by fixed-length links. Each tick:
//! pin the endpoints to the hand anchors, integrate the interior points
//! (damped Verlet plus a downward bias), blend them toward a phase-derived
//! swing target, then run a fixed number of distance-constraint passes and
//! clamp anything that dipped below the ground line.
//!
//! This is a visual approximation, not a physical solver: link corrections
//! split the length error in half between the endpoints, with the full
//! correction going to the free point when its partner is pinned.

use glam::Vec3;

use crate::consts::*;

/// One mass point: current and previous position (Verlet state).
/// z is the depth axis; negative z renders behind the character.
#[derive(Debug, Clone, Copy)]
pub struct StrandPoint {
    pub pos: Vec3,
    pub prev: Vec3,
}

impl StrandPoint {
    fn at(pos: Vec3) -> Self {
        Self { pos, prev: pos }
    }
}

/// The mass-point chain. Point count and rest lengths are fixed at
/// construction; points 0 and N are pinned to the hand anchors and never
/// touched by the constraint passes.
#[derive(Debug, Clone)]
pub struct Strand {
    points: Vec<StrandPoint>,
    rest_length: f32,
}

impl Strand {
    /// Seed the chain as a sagging arc between the hand anchors. The
    /// constraint passes pull it into shape within a few ticks.
    pub fn new(left_hand: glam::Vec2, right_hand: glam::Vec2) -> Self {
        let n = STRAND_SEGMENTS;
        let points = (0..=n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let x = left_hand.x + (right_hand.x - left_hand.x) * t;
                let y = left_hand.y
                    + (right_hand.y - left_hand.y) * t
                    + (t * std::f32::consts::PI).sin() * STRAND_ARC;
                StrandPoint::at(Vec3::new(x, y, 0.0))
            })
            .collect();
        Self {
            points,
            rest_length: STRAND_LENGTH / n as f32,
        }
    }

    #[inline]
    pub fn points(&self) -> &[StrandPoint] {
        &self.points
    }

    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// One relaxation step. A zero (or negative) dt performs nothing, so a
    /// paused simulation leaves the strand untouched.
    pub fn relax(
        &mut self,
        dt: f32,
        phase: f32,
        left_hand: glam::Vec2,
        right_hand: glam::Vec2,
        ground_y: f32,
    ) {
        if dt <= 0.0 {
            return;
        }

        self.pin_ends(left_hand, right_hand);
        self.integrate(dt);
        self.pull_toward_phase(phase, left_hand, right_hand);
        self.satisfy_constraints(STRAND_ITERATIONS);
        self.clamp_ground(ground_y);
    }

    fn pin_ends(&mut self, left_hand: glam::Vec2, right_hand: glam::Vec2) {
        let last = self.points.len() - 1;
        self.points[0] = StrandPoint::at(Vec3::new(left_hand.x, left_hand.y, 0.0));
        self.points[last] = StrandPoint::at(Vec3::new(right_hand.x, right_hand.y, 0.0));
    }

    /// Damped inertia plus gravity bias for the interior points
    fn integrate(&mut self, dt: f32) {
        let last = self.points.len() - 1;
        for p in &mut self.points[1..last] {
            let vel = (p.pos - p.prev) * STRAND_FRICTION;
            p.prev = p.pos;
            p.pos += vel;
            p.pos.y += STRAND_GRAVITY * dt * dt;
        }
    }

    /// Blend interior points toward the swing circle: y and z follow
    /// sin/cos of the phase, scaled by a bell weight peaking mid-strand.
    fn pull_toward_phase(&mut self, phase: f32, left_hand: glam::Vec2, right_hand: glam::Vec2) {
        let last = self.points.len() - 1;
        let mid = last as f32 / 2.0;
        let (sin, cos) = phase.sin_cos();
        for (i, p) in self.points.iter_mut().enumerate().skip(1).take(last - 1) {
            let bell = 1.0 - (i as f32 - mid).abs() / mid;
            let t = i as f32 / last as f32;
            let anchor_y = left_hand.y + (right_hand.y - left_hand.y) * t;
            let target_y = anchor_y + sin * STRAND_ARC * bell;
            let target_z = cos * STRAND_ARC * bell;
            p.pos.y += (target_y - p.pos.y) * STRAND_PHASE_PULL;
            p.pos.z += (target_z - p.pos.z) * STRAND_PHASE_PULL;
        }
    }

    /// Iterative distance-constraint relaxation. Near-zero link distances
    /// are treated as already satisfied so a degenerate configuration can
    /// never divide by zero and propagate NaN into position state.
    pub(crate) fn satisfy_constraints(&mut self, iterations: usize) {
        let last = self.points.len() - 1;
        for _ in 0..iterations {
            for i in 0..last {
                let delta = self.points[i + 1].pos - self.points[i].pos;
                let dist = delta.length();
                if dist < 1e-6 {
                    continue;
                }
                let correction = delta * ((dist - self.rest_length) / dist);
                let a_pinned = i == 0;
                let b_pinned = i + 1 == last;
                match (a_pinned, b_pinned) {
                    (false, false) => {
                        self.points[i].pos += correction * 0.5;
                        self.points[i + 1].pos -= correction * 0.5;
                    }
                    (true, false) => self.points[i + 1].pos -= correction,
                    (false, true) => self.points[i].pos += correction,
                    (true, true) => {}
                }
            }
        }
    }

    /// Keep points above the ground line, damping the stored previous-Y so
    /// the next integration step does not inject the clamped-away energy
    /// back as velocity.
    fn clamp_ground(&mut self, ground_y: f32) {
        for p in &mut self.points {
            if p.pos.y > ground_y {
                let overshoot = p.pos.y - p.prev.y;
                p.pos.y = ground_y;
                p.prev.y = ground_y + overshoot * STRAND_GROUND_BOUNCE;
            }
        }
    }

    /// Largest deviation of any link from its rest length
    pub fn max_link_error(&self) -> f32 {
        self.points
            .windows(2)
            .map(|w| ((w[1].pos - w[0].pos).length() - self.rest_length).abs())
            .fold(0.0, f32::max)
    }
}
