//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per call, no internal clock
//! - Seeded RNG only
//! - All state in `GameState`

pub mod camera;
pub mod collision;
pub mod hostile;
pub mod particle;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod worm;

pub use collision::CollisionReport;
pub use state::{GamePhase, GameState, Hostile, Laser, Particle, Pickup, World};
pub use tick::{TickReport, autopilot_intent, tick};
pub use worm::{Segment, Worm, target_direction};
