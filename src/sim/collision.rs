//! Collision resolution
//!
//! Everything is a radius overlap test (`distance < threshold`) evaluated once
//! per tick. The three phases run in a fixed order because each one mutates
//! pools a later phase reads:
//!
//! 1. laser vs hedgehog
//! 2. worm head vs hedgehog
//! 3. worm head vs leaf

use serde::Serialize;

use super::particle;
use super::spawn::spawn_pickup;
use super::state::GameState;
use crate::circles_overlap;

/// What happened during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollisionReport {
    /// Laser hits landed (each consumed one laser)
    pub laser_hits: u32,
    pub hostiles_killed: u32,
    /// Damage events on the worm
    pub damage_taken: u32,
    pub pickups_eaten: u32,
}

/// Run all three phases in order
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    lasers_vs_hostiles(state, &mut report);
    head_vs_hostiles(state, &mut report);
    head_vs_pickups(state, &mut report);
    report
}

/// Each laser damages at most one hedgehog and is consumed. Among overlapping
/// hedgehogs the most recently spawned one takes the hit. A hedgehog at 0 hp
/// is removed and leaves a leaf behind.
pub fn lasers_vs_hostiles(state: &mut GameState, report: &mut CollisionReport) {
    let radius = state.config.laser_hit_radius;
    let mut i = 0;
    while i < state.lasers.len() {
        let laser_pos = state.lasers[i].pos;
        let Some(j) = state
            .hostiles
            .iter()
            .rposition(|h| circles_overlap(laser_pos, h.pos, radius))
        else {
            i += 1;
            continue;
        };

        // Removal shifts the next laser into slot i
        state.lasers.remove(i);
        report.laser_hits += 1;

        let hostile = &mut state.hostiles[j];
        hostile.hp = hostile.hp.saturating_sub(1);
        if hostile.hp == 0 {
            let dead = state.hostiles.remove(j);
            log::debug!("Hedgehog {} killed at {:?}", dead.id, dead.pos);
            report.hostiles_killed += 1;
            spawn_pickup(state);
        }
    }
}

/// A hedgehog touching the head costs the worm its tail segment and is
/// removed. With a single segment left the hedgehog is still removed and the
/// damage still counts; only the segment removal is refused.
pub fn head_vs_hostiles(state: &mut GameState, report: &mut CollisionReport) {
    let radius = state.config.damage_radius();
    let threshold = state.config.damage_threshold;
    let head = state.head();

    let mut i = 0;
    while i < state.hostiles.len() {
        if state.game_over {
            break;
        }
        if !circles_overlap(head, state.hostiles[i].pos, radius) {
            i += 1;
            continue;
        }

        let hostile = state.hostiles.remove(i);
        let origin = state.worm.shrink().map_or(head, |lost| lost.pos);
        state.segments_lost += 1;
        report.damage_taken += 1;
        log::debug!(
            "Worm hit by hedgehog {}: {} segments left, damage {}/{}",
            hostile.id,
            state.worm.len(),
            state.segments_lost,
            threshold
        );

        particle::burst(state, origin);

        if state.segments_lost >= threshold {
            state.game_over = true;
        }
    }
}

/// Eating a leaf grows the tail, heals one point of damage and drops a
/// replacement leaf somewhere else.
pub fn head_vs_pickups(state: &mut GameState, report: &mut CollisionReport) {
    let radius = state.config.heal_radius();
    let head = state.head();

    let before = state.pickups.len();
    state.pickups.retain(|p| !circles_overlap(head, p.pos, radius));
    let eaten = before - state.pickups.len();

    // Replacements are spawned after the scan so none is tested this tick
    for _ in 0..eaten {
        state.worm.grow();
        state.segments_lost = state.segments_lost.saturating_sub(1);
        spawn_pickup(state);
    }
    if eaten > 0 {
        log::debug!("Ate {} leaves: {} segments", eaten, state.worm.len());
    }
    report.pickups_eaten += eaten as u32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Hostile, Laser, Pickup};
    use glam::Vec2;

    fn empty_state() -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.hostiles.clear();
        state.pickups.clear();
        state
    }

    fn add_hostile(state: &mut GameState, pos: Vec2, hp: u8) -> u32 {
        let id = state.next_entity_id();
        state.hostiles.push(Hostile {
            id,
            pos,
            hp,
            speed: 1.0,
            direction: 0.0,
        });
        id
    }

    fn add_pickup(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.pickups.push(Pickup { id, pos });
        id
    }

    fn add_laser(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.lasers.push(Laser {
            id,
            pos,
            direction: 0.0,
            speed: 8.0,
            active: true,
        });
        id
    }

    #[test]
    fn test_laser_damages_one_hostile_only() {
        let mut state = empty_state();
        let older = add_hostile(&mut state, Vec2::new(100.0, 100.0), 2);
        let newer = add_hostile(&mut state, Vec2::new(105.0, 100.0), 2);
        add_laser(&mut state, Vec2::new(102.0, 100.0));

        let report = resolve(&mut state);

        assert_eq!(report.laser_hits, 1);
        assert!(state.lasers.is_empty());
        let hit: Vec<_> = state.hostiles.iter().map(|h| (h.id, h.hp)).collect();
        // Newest overlapping hedgehog takes the hit
        assert_eq!(hit, vec![(older, 2), (newer, 1)]);
    }

    #[test]
    fn test_two_lasers_kill_and_drop_one_leaf() {
        let mut state = empty_state();
        add_hostile(&mut state, Vec2::new(100.0, 100.0), 2);
        add_laser(&mut state, Vec2::new(100.0, 110.0));
        add_laser(&mut state, Vec2::new(100.0, 90.0));
        add_laser(&mut state, Vec2::new(400.0, 400.0));

        let report = resolve(&mut state);

        assert_eq!(report.laser_hits, 2);
        assert_eq!(report.hostiles_killed, 1);
        assert!(state.hostiles.is_empty());
        assert_eq!(state.pickups.len(), 1);
        // Only the miss survives; nothing skipped by the removals
        assert_eq!(state.lasers.len(), 1);
        assert_eq!(state.lasers[0].pos, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_head_hit_costs_tail_and_removes_hostile() {
        let mut state = empty_state();
        let head = state.head();
        add_hostile(&mut state, head + Vec2::new(20.0, 0.0), 2);

        let report = resolve(&mut state);

        assert_eq!(report.damage_taken, 1);
        assert_eq!(state.worm.len(), 9);
        assert_eq!(state.segments_lost, 1);
        assert!(state.hostiles.is_empty());
        assert_eq!(state.particles.len(), 7);
        assert!(!state.game_over);
    }

    #[test]
    fn test_damage_radius_is_strict() {
        let mut state = empty_state();
        let head = state.head();
        add_hostile(&mut state, head + Vec2::new(0.0, 27.0), 2);
        resolve(&mut state);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.segments_lost, 0);
    }

    #[test]
    fn test_single_segment_damage_still_resolves() {
        let mut state = empty_state();
        state.worm.segments.truncate(1);
        let head = state.head();
        add_hostile(&mut state, head, 2);

        resolve(&mut state);

        assert_eq!(state.worm.len(), 1);
        assert_eq!(state.segments_lost, 1);
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_threshold_sets_game_over_and_stops_damage() {
        let mut state = empty_state();
        state.segments_lost = 3;
        let head = state.head();
        add_hostile(&mut state, head, 2);
        add_hostile(&mut state, head, 2);

        resolve(&mut state);

        assert!(state.game_over);
        assert_eq!(state.segments_lost, 4);
        assert_eq!(state.hostiles.len(), 1);
    }

    #[test]
    fn test_pickup_grows_and_heals() {
        let mut state = empty_state();
        state.segments_lost = 2;
        let head = state.head();
        let id = add_pickup(&mut state, head + Vec2::new(5.0, 5.0));

        let report = resolve(&mut state);

        assert_eq!(report.pickups_eaten, 1);
        assert_eq!(state.worm.len(), 11);
        assert_eq!(state.segments_lost, 1);
        // Replacement leaf
        assert_eq!(state.pickups.len(), 1);
        assert_ne!(state.pickups[0].id, id);
    }

    #[test]
    fn test_pickup_without_damage_does_not_underflow() {
        let mut state = empty_state();
        let head = state.head();
        add_pickup(&mut state, head);

        resolve(&mut state);

        assert_eq!(state.worm.len(), 11);
        assert_eq!(state.segments_lost, 0);
    }

    #[test]
    fn test_multiple_pickups_in_one_pass() {
        let mut state = empty_state();
        let head = state.head();
        for offset in [0.0, 3.0, 6.0] {
            add_pickup(&mut state, head + Vec2::new(offset, 0.0));
        }
        add_pickup(&mut state, head + Vec2::new(500.0, 0.0));

        let report = resolve(&mut state);

        assert_eq!(report.pickups_eaten, 3);
        assert_eq!(state.worm.len(), 13);
        assert_eq!(state.pickups.len(), 4);
    }
}
