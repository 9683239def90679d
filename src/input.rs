//! Key event to intent translation
//!
//! The simulation only ever sees an [`Intent`] sampled once per tick. The
//! platform feeds raw key transitions into a [`KeyboardAdapter`].

use serde::{Deserialize, Serialize};

/// Minimum time between two shots (milliseconds)
pub const SHOOT_COOLDOWN_MS: f64 = 200.0;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub move_left: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub move_right: bool,
    /// Fire one laser this tick
    pub shoot: bool,
    /// Idle/demo mode - the simulation steers and shoots by itself
    pub autopilot: bool,
}

impl Intent {
    /// True if any directional intent is held
    pub fn is_moving(&self) -> bool {
        self.move_left || self.move_up || self.move_down || self.move_right
    }
}

/// Keys bound to gameplay (AZERTY layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left
    Q,
    /// Up
    Z,
    /// Down
    S,
    /// Right
    D,
    /// Shoot
    Space,
}

/// Tracks held keys between ticks
///
/// Movement is level-triggered: the last known key state wins. Shooting is
/// edge-triggered on key-down and rate limited by [`SHOOT_COOLDOWN_MS`]; an
/// accepted shot stays pending until the next [`KeyboardAdapter::sample`].
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    held: Intent,
    shot_pending: bool,
    last_shot_ms: Option<f64>,
}

impl KeyboardAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press at `now_ms` (platform clock, milliseconds)
    pub fn key_down(&mut self, key: Key, now_ms: f64) {
        match key {
            Key::Q => self.held.move_left = true,
            Key::Z => self.held.move_up = true,
            Key::S => self.held.move_down = true,
            Key::D => self.held.move_right = true,
            Key::Space => {
                let ready = self
                    .last_shot_ms
                    .is_none_or(|last| now_ms - last > SHOOT_COOLDOWN_MS);
                if ready {
                    self.shot_pending = true;
                    self.last_shot_ms = Some(now_ms);
                }
            }
        }
    }

    /// Record a key release
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Q => self.held.move_left = false,
            Key::Z => self.held.move_up = false,
            Key::S => self.held.move_down = false,
            Key::D => self.held.move_right = false,
            Key::Space => self.shot_pending = false,
        }
    }

    /// Toggle demo mode
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.held.autopilot = enabled;
    }

    /// Snapshot the intents for one tick, consuming any pending shot
    pub fn sample(&mut self) -> Intent {
        let mut intent = self.held;
        intent.shoot = std::mem::take(&mut self.shot_pending);
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_is_level_triggered() {
        let mut adapter = KeyboardAdapter::new();
        adapter.key_down(Key::D, 0.0);
        assert!(adapter.sample().move_right);
        assert!(adapter.sample().move_right);
        adapter.key_up(Key::D);
        assert!(!adapter.sample().is_moving());
    }

    #[test]
    fn test_shot_consumed_by_sample() {
        let mut adapter = KeyboardAdapter::new();
        adapter.key_down(Key::Space, 1000.0);
        assert!(adapter.sample().shoot);
        assert!(!adapter.sample().shoot);
    }

    #[test]
    fn test_shoot_cooldown() {
        let mut adapter = KeyboardAdapter::new();
        adapter.key_down(Key::Space, 1000.0);
        adapter.sample();
        adapter.key_down(Key::Space, 1150.0);
        assert!(!adapter.sample().shoot);
        adapter.key_down(Key::Space, 1201.0);
        assert!(adapter.sample().shoot);
    }
}
