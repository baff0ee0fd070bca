//! Decorative cloud field
//!
//! Cosmetic only, and only for the parametric rope variant. Clouds drift in
//! the tick (not during drawing) so the renderer can stay a pure function
//! of state.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::CLOUD_COUNT;
use crate::settings::RopeVariant;

/// One drifting cloud
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

/// The backdrop's moving elements
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub clouds: Vec<Cloud>,
}

impl Environment {
    /// Scatter the cloud field. The strand variant runs without a backdrop,
    /// so it gets an empty field.
    pub fn new(variant: RopeVariant, seed: u64) -> Self {
        let clouds = match variant {
            RopeVariant::Strand => Vec::new(),
            RopeVariant::Parametric => {
                let mut rng = Pcg32::seed_from_u64(seed);
                (0..CLOUD_COUNT)
                    .map(|i| Cloud {
                        x: 120.0 + i as f32 * 180.0,
                        y: 60.0 + rng.random::<f32>() * 80.0,
                        size: 80.0 + rng.random::<f32>() * 40.0,
                        speed: 12.0 + rng.random::<f32>() * 8.0,
                    })
                    .collect()
            }
        };
        Self { clouds }
    }

    /// Drift clouds rightward, wrapping off-screen ones back to the left edge
    pub fn advance(&mut self, dt: f32, view_width: f32) {
        for cloud in &mut self.clouds {
            cloud.x += cloud.speed * dt * 0.5;
            if cloud.x - cloud.size * 0.8 > view_width + 60.0 {
                cloud.x = -60.0;
            }
        }
    }
}
