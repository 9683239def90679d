//! Game configuration
//!
//! Fixed at construction time. Defaults live in [`crate::consts`]; a JSON
//! document may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Construction-time tuning for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub world_width_tiles: u32,
    pub world_height_tiles: u32,
    pub tile_size: f32,
    /// Viewport the camera frames (world units)
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Worm ===
    pub initial_segments: usize,
    /// Segment radius; also the inset of the head's hard boundary
    pub segment_size: f32,
    pub segment_spacing: f32,
    pub worm_speed: f32,

    // === Lasers ===
    pub laser_speed: f32,
    pub laser_hit_radius: f32,

    // === Hedgehogs ===
    pub hostile_speed: f32,
    pub hostile_hp: u8,
    pub hostile_cap: usize,
    /// Ticks between timed spawn attempts
    pub hostile_spawn_interval: u32,
    pub hostile_min_spawn_distance: f32,
    pub hostile_spawn_margin: f32,
    pub initial_hostiles: usize,

    // === Leaves ===
    pub pickup_spawn_margin: f32,
    pub initial_pickups: usize,

    // === Collision radii (added to segment_size) ===
    pub damage_radius_bonus: f32,
    pub heal_radius_bonus: f32,

    // === Blood particles ===
    pub particle_gravity: f32,
    /// Lifetime drawn from [min, max)
    pub particle_min_age: f32,
    pub particle_max_age: f32,
    pub particle_burst_base: usize,
    pub particle_burst_per_loss: usize,

    /// Damage events that end the run
    pub damage_threshold: u32,

    /// Seed for spawn placement and particle jitter
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width_tiles: WORLD_WIDTH_TILES,
            world_height_tiles: WORLD_HEIGHT_TILES,
            tile_size: TILE_SIZE,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            initial_segments: SEGMENT_COUNT,
            segment_size: SEGMENT_SIZE,
            segment_spacing: SEGMENT_SPACING,
            worm_speed: WORM_SPEED,

            laser_speed: LASER_SPEED,
            laser_hit_radius: LASER_HIT_RADIUS,

            hostile_speed: HOSTILE_SPEED,
            hostile_hp: HOSTILE_HP,
            hostile_cap: HOSTILE_CAP,
            hostile_spawn_interval: HOSTILE_SPAWN_INTERVAL,
            hostile_min_spawn_distance: HOSTILE_MIN_SPAWN_DISTANCE,
            hostile_spawn_margin: HOSTILE_SPAWN_MARGIN,
            initial_hostiles: INITIAL_HOSTILES,

            pickup_spawn_margin: PICKUP_SPAWN_MARGIN,
            initial_pickups: INITIAL_PICKUPS,

            damage_radius_bonus: DAMAGE_RADIUS_BONUS,
            heal_radius_bonus: HEAL_RADIUS_BONUS,

            particle_gravity: PARTICLE_GRAVITY,
            particle_min_age: PARTICLE_MIN_AGE,
            particle_max_age: PARTICLE_MAX_AGE,
            particle_burst_base: PARTICLE_BURST_BASE,
            particle_burst_per_loss: PARTICLE_BURST_PER_LOSS,

            damage_threshold: DAMAGE_THRESHOLD,

            seed: 0x5EED_0F_3012,
        }
    }
}

impl GameConfig {
    /// World width in world units
    pub fn world_width(&self) -> f32 {
        self.world_width_tiles as f32 * self.tile_size
    }

    /// World height in world units
    pub fn world_height(&self) -> f32 {
        self.world_height_tiles as f32 * self.tile_size
    }

    /// Head vs hedgehog overlap radius
    pub fn damage_radius(&self) -> f32 {
        self.segment_size + self.damage_radius_bonus
    }

    /// Head vs leaf overlap radius
    pub fn heal_radius(&self) -> f32 {
        self.segment_size + self.heal_radius_bonus
    }

    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.world_width_tiles == 0 || self.world_height_tiles == 0 {
            return Err(ConfigError::invalid("world_*_tiles", "world must be at least one tile"));
        }
        if self.tile_size <= 0.0 {
            return Err(ConfigError::invalid("tile_size", "must be positive"));
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(ConfigError::invalid("viewport_*", "must be positive"));
        }
        if self.initial_segments == 0 {
            return Err(ConfigError::invalid("initial_segments", "worm needs at least one segment"));
        }
        if self.segment_size <= 0.0 || self.segment_spacing <= 0.0 {
            return Err(ConfigError::invalid("segment_*", "must be positive"));
        }
        if 2.0 * self.segment_size >= self.world_width().min(self.world_height()) {
            return Err(ConfigError::invalid("segment_size", "worm does not fit in the world"));
        }
        if self.worm_speed <= 0.0 || self.laser_speed <= 0.0 || self.hostile_speed < 0.0 {
            return Err(ConfigError::invalid("*_speed", "speeds must be positive"));
        }
        if self.hostile_hp == 0 {
            return Err(ConfigError::invalid("hostile_hp", "must be at least 1"));
        }
        if self.hostile_spawn_interval == 0 {
            return Err(ConfigError::invalid("hostile_spawn_interval", "must be at least 1 tick"));
        }
        let min_side = self.world_width().min(self.world_height());
        if self.hostile_spawn_margin < 0.0 || 2.0 * self.hostile_spawn_margin >= min_side {
            return Err(ConfigError::invalid("hostile_spawn_margin", "leaves no spawn area"));
        }
        if self.pickup_spawn_margin < 0.0 || 2.0 * self.pickup_spawn_margin >= min_side {
            return Err(ConfigError::invalid("pickup_spawn_margin", "leaves no spawn area"));
        }
        if self.particle_min_age < 0.0 || self.particle_min_age >= self.particle_max_age {
            return Err(ConfigError::invalid("particle_*_age", "lifetime range is empty"));
        }
        if self.damage_threshold == 0 {
            return Err(ConfigError::invalid("damage_threshold", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_world() {
        let config = GameConfig::default();
        assert_eq!(config.world_width(), 1600.0);
        assert_eq!(config.world_height(), 1280.0);
        assert_eq!(config.damage_radius(), 27.0);
        assert_eq!(config.heal_radius(), 22.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "initial_segments": 4, "seed": 7 }"#).unwrap();
        assert_eq!(config.initial_segments, 4);
        assert_eq!(config.seed, 7);
        assert_eq!(config.hostile_cap, HOSTILE_CAP);
    }

    #[test]
    fn test_rejects_zero_segments() {
        let err = GameConfig::from_json_str(r#"{ "initial_segments": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "initial_segments", .. }));
    }

    #[test]
    fn test_rejects_empty_lifetime_range() {
        let config = GameConfig {
            particle_min_age: 50.0,
            particle_max_age: 50.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
