//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]. Subsystems take
//! `&mut GameState` (or a borrow of one of its fields) and keep nothing of
//! their own.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::worm::Worm;
use crate::config::GameConfig;
use crate::error::Result;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Damage threshold reached. Only held for the duration of
    /// [`GameState::reset`], so callers always observe `Running` between
    /// ticks; a reset is reported through `TickReport::reset`.
    Resetting,
}

/// World bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
}

impl World {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.world_width(),
            height: config.world_height(),
            tile_size: config.tile_size,
        }
    }

    /// Inclusive containment in [0, width] x [0, height]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// A laser bolt
#[derive(Debug, Clone, Serialize)]
pub struct Laser {
    pub id: u32,
    pub pos: Vec2,
    /// Heading in radians
    pub direction: f32,
    pub speed: f32,
    pub active: bool,
}

/// A hedgehog chasing the worm head
#[derive(Debug, Clone, Serialize)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    pub hp: u8,
    pub speed: f32,
    /// Facing in radians (toward the head once it has moved)
    pub direction: f32,
}

/// A leaf: grows the worm and heals one point of damage
#[derive(Debug, Clone, Serialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
}

/// A blood particle (visual only)
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks alive
    pub age: f32,
    pub max_age: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    #[serde(skip)]
    pub config: GameConfig,
    pub world: World,
    pub worm: Worm,
    pub lasers: Vec<Laser>,
    pub hostiles: Vec<Hostile>,
    pub pickups: Vec<Pickup>,
    pub particles: Vec<Particle>,
    /// Damage taken since the last reset, net of healing
    pub segments_lost: u32,
    /// Set when `segments_lost` reaches the damage threshold
    pub game_over: bool,
    /// Top-left corner of the viewport in world space
    pub camera: Vec2,
    pub phase: GamePhase,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    /// Ticks since the last timed hedgehog spawn attempt
    pub spawn_timer: u32,
    /// Completed resets
    pub resets: u32,
    #[serde(skip)]
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run. The config is assumed valid; see [`GameState::try_new`].
    pub fn new(config: GameConfig) -> Self {
        let world = World::from_config(&config);
        let rng = Pcg32::seed_from_u64(config.seed);
        let mut state = Self {
            worm: Worm::new(&config, &world),
            world,
            lasers: Vec::new(),
            hostiles: Vec::new(),
            pickups: Vec::new(),
            particles: Vec::new(),
            segments_lost: 0,
            game_over: false,
            camera: Vec2::ZERO,
            phase: GamePhase::Running,
            time_ticks: 0,
            spawn_timer: 0,
            resets: 0,
            rng,
            next_id: 1,
            config,
        };

        super::spawn::seed_initial(&mut state);
        super::camera::update(&mut state);
        state
    }

    /// Validate the config, then create a fresh run
    pub fn try_new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Current head position
    pub fn head(&self) -> Vec2 {
        self.worm.head().pos
    }

    /// Remaining health in 0-1 for the HUD bar
    pub fn health_fraction(&self) -> f32 {
        let threshold = self.config.damage_threshold.max(1) as f32;
        (1.0 - self.segments_lost as f32 / threshold).clamp(0.0, 1.0)
    }

    /// Render contract as JSON
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Return the run to its initial conditions (worm, pools, damage, timers)
    pub fn reset(&mut self) {
        self.phase = GamePhase::Resetting;
        log::info!(
            "Run over after {} ticks with {} segments; resetting",
            self.time_ticks,
            self.worm.len()
        );

        self.worm = Worm::new(&self.config, &self.world);
        self.lasers.clear();
        self.hostiles.clear();
        self.pickups.clear();
        self.particles.clear();
        self.segments_lost = 0;
        self.game_over = false;
        self.spawn_timer = 0;
        self.resets += 1;

        super::spawn::seed_initial(self);
        self.phase = GamePhase::Running;
    }
}
