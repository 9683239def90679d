//! Fixed-step simulation tick
//!
//! One call advances the whole game by one frame:
//! input -> worm -> lasers -> hedgehogs -> spawns -> particles -> collisions
//! -> reset check -> camera.

use std::f32::consts::FRAC_PI_8;

use serde::Serialize;

use super::collision::{self, CollisionReport};
use super::state::GameState;
use super::{camera, hostile, particle, projectile, spawn};
use crate::input::Intent;
use crate::{angle_between, normalize_angle};

/// Autopilot fires at most this often (200 ms at 60 Hz)
pub const AUTOPILOT_FIRE_INTERVAL: u64 = 12;
/// Autopilot only shoots at hedgehogs this close
pub const AUTOPILOT_FIRE_RANGE: f32 = 300.0;

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub fired: bool,
    pub hostile_spawned: bool,
    pub collisions: CollisionReport,
    /// The damage threshold was reached and the run restarted
    pub reset: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, intent: &Intent) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    let intent = if intent.autopilot {
        autopilot_intent(state)
    } else {
        *intent
    };

    state.worm.steer(&intent, &state.world);

    if intent.shoot {
        let head = state.worm.head();
        let (origin, heading) = (head.pos, state.worm.direction);
        projectile::fire(state, origin, heading);
        report.fired = true;
    }
    projectile::advance(&mut state.lasers, &state.world);

    let head = state.head();
    hostile::advance(&mut state.hostiles, head);

    report.hostile_spawned = spawn::maybe_spawn_hostile(state);

    particle::advance(&mut state.particles, state.config.particle_gravity);

    report.collisions = collision::resolve(state);

    if state.game_over {
        state.reset();
        report.reset = true;
    }

    camera::update(state);

    log::trace!(
        "tick {}: {} segments, {} lasers, {} hedgehogs, {} leaves, {} particles",
        state.time_ticks,
        state.worm.len(),
        state.lasers.len(),
        state.hostiles.len(),
        state.pickups.len(),
        state.particles.len()
    );

    report
}

/// Idle/demo mode: head for the nearest leaf, shoot hedgehogs in front
pub fn autopilot_intent(state: &GameState) -> Intent {
    let head = state.head();
    let mut intent = Intent {
        autopilot: true,
        ..Default::default()
    };

    let nearest_leaf = state.pickups.iter().min_by(|a, b| {
        a.pos
            .distance_squared(head)
            .partial_cmp(&b.pos.distance_squared(head))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(leaf) = nearest_leaf {
        // Dead zone of one step keeps the worm from jittering across an axis
        let delta = leaf.pos - head;
        let dead_zone = state.worm.speed;
        intent.move_right = delta.x > dead_zone;
        intent.move_left = delta.x < -dead_zone;
        intent.move_down = delta.y > dead_zone;
        intent.move_up = delta.y < -dead_zone;
    }

    if state.time_ticks % AUTOPILOT_FIRE_INTERVAL == 0 {
        intent.shoot = state.hostiles.iter().any(|h| {
            h.pos.distance(head) < AUTOPILOT_FIRE_RANGE
                && normalize_angle(angle_between(head, h.pos) - state.worm.direction).abs()
                    < FRAC_PI_8
        });
    }

    intent
}
