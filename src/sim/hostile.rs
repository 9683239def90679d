//! Hedgehog pursuit
//!
//! Pure seek toward the worm head: no path-finding, no separation, overlap
//! between hedgehogs is allowed.

use glam::Vec2;

use super::state::{GameState, Hostile};
use crate::{angle_between, direction};

/// Build a full-health hedgehog at `pos`
pub fn new_hostile(state: &mut GameState, pos: Vec2) -> Hostile {
    Hostile {
        id: state.next_entity_id(),
        pos,
        hp: state.config.hostile_hp,
        speed: state.config.hostile_speed,
        direction: 0.0,
    }
}

/// Step every hedgehog toward `head`
pub fn advance(hostiles: &mut [Hostile], head: Vec2) {
    for hostile in hostiles.iter_mut() {
        // Already on the head: hold position this tick
        let Some(dir) = direction(hostile.pos, head) else {
            continue;
        };
        hostile.direction = angle_between(hostile.pos, head);
        hostile.pos += dir * hostile.speed;
    }
}
