//! Worm Chase - A top-down chase/shooter simulation core
//!
//! Core modules:
//! - `sim`: Simulation (worm chain, projectiles, hostiles, pickups, particles, collisions)
//! - `input`: Key event to intent translation
//! - `config`: Construction-time tuning
//! - `driver`: Tick loop with cooperative stop

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod sim;

pub use config::GameConfig;
pub use driver::{Driver, StopToken};
pub use error::ConfigError;
pub use input::{Intent, Key, KeyboardAdapter};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate of the external driver
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Damage taken before the run resets
    pub const DAMAGE_THRESHOLD: u32 = 4;

    /// Worm defaults
    pub const SEGMENT_COUNT: usize = 10;
    pub const SEGMENT_SIZE: f32 = 12.0;
    pub const SEGMENT_SPACING: f32 = 16.0;
    pub const WORM_SPEED: f32 = 2.0;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 8.0;
    pub const LASER_HIT_RADIUS: f32 = 20.0;

    /// Hedgehog defaults
    pub const HOSTILE_SPEED: f32 = 1.0;
    pub const HOSTILE_HP: u8 = 2;
    pub const HOSTILE_CAP: usize = 8;
    pub const HOSTILE_SPAWN_INTERVAL: u32 = 300; // ticks (~5 seconds at 60 Hz)
    pub const HOSTILE_MIN_SPAWN_DISTANCE: f32 = 200.0;
    pub const HOSTILE_SPAWN_MARGIN: f32 = 100.0;
    pub const INITIAL_HOSTILES: usize = 3;
    /// Added to the segment radius for head vs hedgehog
    pub const DAMAGE_RADIUS_BONUS: f32 = 15.0;

    /// Leaf defaults
    pub const PICKUP_SPAWN_MARGIN: f32 = 50.0;
    pub const INITIAL_PICKUPS: usize = 5;
    /// Added to the segment radius for head vs leaf
    pub const HEAL_RADIUS_BONUS: f32 = 10.0;

    /// Blood particle defaults
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const PARTICLE_MIN_AGE: f32 = 30.0;
    pub const PARTICLE_MAX_AGE: f32 = 50.0;
    pub const PARTICLE_BURST_BASE: usize = 5;
    pub const PARTICLE_BURST_PER_LOSS: usize = 2;

    /// World defaults (in tiles)
    pub const WORLD_WIDTH_TILES: u32 = 50;
    pub const WORLD_HEIGHT_TILES: u32 = 40;
    pub const TILE_SIZE: f32 = 32.0;

    /// Canvas the camera frames
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector pointing from `from` to `to`, or `None` if the points coincide
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let len = delta.length();
    if len > 0.0 { Some(delta / len) } else { None }
}

/// Angle of the vector from `from` to `to` (radians, atan2 convention)
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Unit vector for a heading in radians
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Circular overlap test (strict)
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_direction_coincident_points() {
        let p = Vec2::new(3.0, 4.0);
        assert!(direction(p, p).is_none());
    }

    #[test]
    fn test_direction_is_unit() {
        let dir = direction(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_angle_between() {
        assert!((angle_between(Vec2::ZERO, Vec2::new(0.0, 5.0)) - PI / 2.0).abs() < 1e-6);
        assert!((angle_between(Vec2::ZERO, Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) - (-PI / 2.0)).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
        // 3π lands on the ±π seam; either side is the same heading
        let seam = normalize_angle(3.0 * PI);
        assert!((-PI..PI).contains(&seam));
        assert!((seam.abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, Vec2::new(19.9, 0.0), 20.0));
        assert!(!circles_overlap(Vec2::ZERO, Vec2::new(20.0, 0.0), 20.0));
    }
}
