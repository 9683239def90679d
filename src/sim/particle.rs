//! Blood particles spawned when the worm takes damage. Cosmetic only.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};

/// Emit a damage burst at `origin`, sized by the damage taken so far
pub fn burst(state: &mut GameState, origin: Vec2) {
    let config = &state.config;
    let count =
        config.particle_burst_base + config.particle_burst_per_loss * state.segments_lost as usize;
    let (min_age, max_age) = (config.particle_min_age, config.particle_max_age);

    state.particles.reserve(count);
    for _ in 0..count {
        // Upward-biased spray
        let vel = Vec2::new(
            state.rng.random_range(-2.0..=2.0),
            state.rng.random_range(-3.0..=-1.0),
        );
        let max_age = state.rng.random_range(min_age..max_age);
        state.particles.push(Particle {
            pos: origin,
            vel,
            age: 0.0,
            max_age,
        });
    }
}

/// Integrate, apply gravity, age and cull
pub fn advance(particles: &mut Vec<Particle>, gravity: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += gravity;
        particle.age += 1.0;
    }
    particles.retain(|p| p.age < p.max_age);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_burst_size_scales_with_damage() {
        let mut state = GameState::new(GameConfig::default());
        state.segments_lost = 1;
        burst(&mut state, Vec2::ZERO);
        assert_eq!(state.particles.len(), 7);

        state.particles.clear();
        state.segments_lost = 3;
        burst(&mut state, Vec2::ZERO);
        assert_eq!(state.particles.len(), 11);
    }

    #[test]
    fn test_burst_ranges() {
        let mut state = GameState::new(GameConfig::default());
        state.segments_lost = 4;
        burst(&mut state, Vec2::new(10.0, 10.0));
        for p in &state.particles {
            assert!((-2.0..=2.0).contains(&p.vel.x));
            assert!((-3.0..=-1.0).contains(&p.vel.y));
            assert!(p.max_age >= 30.0 && p.max_age < 50.0);
            assert_eq!(p.pos, Vec2::new(10.0, 10.0));
        }
    }

    #[test]
    fn test_gravity_and_expiry() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            age: 0.0,
            max_age: 2.0,
        }];
        advance(&mut particles, 0.2);
        assert_eq!(particles[0].pos, Vec2::new(1.0, -1.0));
        assert!((particles[0].vel.y - (-0.8)).abs() < 1e-6);
        assert_eq!(particles[0].age, 1.0);

        advance(&mut particles, 0.2);
        assert!(particles.is_empty());
    }
}
