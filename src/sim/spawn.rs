//! Timed and replacement spawning for hedgehogs and leaves
//!
//! Hedgehog placement can fail: a candidate too close to the head is dropped,
//! not retried. Leaf placement always succeeds.

use glam::Vec2;
use rand::Rng;

use super::hostile::new_hostile;
use super::state::{GameState, Pickup};

/// Uniform point inside the world inset by `margin` on every side
fn random_point(state: &mut GameState, margin: f32) -> Vec2 {
    let (w, h) = (state.world.width, state.world.height);
    Vec2::new(
        margin + state.rng.random::<f32>() * (w - 2.0 * margin),
        margin + state.rng.random::<f32>() * (h - 2.0 * margin),
    )
}

/// Place a hedgehog at `candidate` unless it is too close to the head.
/// Returns whether one was added.
pub fn place_hostile(state: &mut GameState, candidate: Vec2) -> bool {
    let distance = candidate.distance(state.head());
    if distance <= state.config.hostile_min_spawn_distance {
        log::debug!("Hedgehog spawn skipped: {:.0} from head", distance);
        return false;
    }
    let hostile = new_hostile(state, candidate);
    log::debug!("Hedgehog {} spawned at {:?}", hostile.id, candidate);
    state.hostiles.push(hostile);
    true
}

/// Try one hedgehog at a random point inside the spawn margin
pub fn spawn_hostile(state: &mut GameState) -> bool {
    let margin = state.config.hostile_spawn_margin;
    let candidate = random_point(state, margin);
    place_hostile(state, candidate)
}

/// Timed spawn: every `hostile_spawn_interval` ticks, if under the cap
pub fn maybe_spawn_hostile(state: &mut GameState) -> bool {
    state.spawn_timer += 1;
    if state.spawn_timer < state.config.hostile_spawn_interval {
        return false;
    }
    state.spawn_timer = 0;
    if state.hostiles.len() >= state.config.hostile_cap {
        return false;
    }
    spawn_hostile(state)
}

/// Drop a leaf at a random point inside the (smaller) pickup margin
pub fn spawn_pickup(state: &mut GameState) {
    let margin = state.config.pickup_spawn_margin;
    let pos = random_point(state, margin);
    let id = state.next_entity_id();
    state.pickups.push(Pickup { id, pos });
}

/// Starting populations for a fresh or reset run
pub fn seed_initial(state: &mut GameState) {
    for _ in 0..state.config.initial_hostiles {
        spawn_hostile(state);
    }
    for _ in 0..state.config.initial_pickups {
        spawn_pickup(state);
    }
    log::debug!(
        "Seeded {} hedgehogs and {} leaves",
        state.hostiles.len(),
        state.pickups.len()
    );
}
