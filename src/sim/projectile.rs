//! Laser bolts
//!
//! No cap on live lasers: they leave only by exiting the world or hitting a
//! hedgehog. Fire-rate limiting belongs to the input adapter.

use glam::Vec2;

use super::state::{GameState, Laser, World};
use crate::heading_vector;

/// Append a live laser at `origin` heading along `direction`
pub fn fire(state: &mut GameState, origin: Vec2, direction: f32) -> &Laser {
    let id = state.next_entity_id();
    state.lasers.push(Laser {
        id,
        pos: origin,
        direction,
        speed: state.config.laser_speed,
        active: true,
    });
    log::trace!("Laser {} fired at {:?} heading {:.2}", id, origin, direction);
    &state.lasers[state.lasers.len() - 1]
}

/// Move every laser one step and drop the ones that left the world
pub fn advance(lasers: &mut Vec<Laser>, world: &World) {
    for laser in lasers.iter_mut() {
        laser.pos += heading_vector(laser.direction) * laser.speed;
        if !world.contains(laser.pos) {
            laser.active = false;
        }
    }
    lasers.retain(|l| l.active);
}
