//! Deterministic simulation module
//!
//! All animation logic lives here. This module must stay pure:
//! - Driven only by delta time and `TickInput`
//! - No rendering or platform dependencies
//! - Bounds-safe by construction (fixed strand size, no dynamic entities)

pub mod character;
pub mod clock;
pub mod environment;
pub mod rope;
pub mod state;
pub mod strand;
pub mod tick;
pub mod viewport;

pub use character::{CharacterBody, JumpController};
pub use clock::Clock;
pub use environment::Environment;
pub use rope::{RopeGeometry, RopeModel};
pub use state::{SimConfig, SimState};
pub use strand::{Strand, StrandPoint};
pub use tick::{TickInput, tick};
pub use viewport::Viewport;
