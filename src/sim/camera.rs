//! Viewport that follows the worm head without showing past the world edge

use glam::Vec2;

use super::state::GameState;

/// Top-left offset of a `viewport`-sized window centered on `head`, clamped
/// to [0, world - viewport] per axis. An axis where the world is smaller
/// than the viewport pins to 0.
pub fn follow(head: Vec2, viewport: Vec2, world: Vec2) -> Vec2 {
    let centered = head - viewport / 2.0;
    Vec2::new(
        clamp_axis(centered.x, world.x - viewport.x),
        clamp_axis(centered.y, world.y - viewport.y),
    )
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Recompute `state.camera` from the current head
pub fn update(state: &mut GameState) {
    let viewport = Vec2::new(state.config.viewport_width, state.config.viewport_height);
    state.camera = follow(state.head(), viewport, state.world.size());
}
