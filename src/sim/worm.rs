//! The worm: a head steered by intent, with every other segment trailing
//! its predecessor once it drifts further than the segment spacing.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::Vec2;
use serde::Serialize;

use super::state::World;
use crate::config::GameConfig;
use crate::input::Intent;
use crate::{angle_between, direction, heading_vector};

/// One link of the chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub pos: Vec2,
    /// Facing in radians
    pub direction: f32,
}

/// The player's worm. `segments[0]` is the head; the chain is never empty.
#[derive(Debug, Clone, Serialize)]
pub struct Worm {
    pub segments: Vec<Segment>,
    /// Current movement heading (0=right, π/2=down, π=left, -π/2=up)
    pub direction: f32,
    pub speed: f32,
    pub segment_size: f32,
    pub segment_spacing: f32,
}

impl Worm {
    /// Lay the worm out horizontally at the world center, facing right
    pub fn new(config: &GameConfig, world: &World) -> Self {
        let start = Vec2::new(world.width / 2.0, world.height / 2.0);
        let count = config.initial_segments.max(1);
        let segments = (0..count)
            .map(|i| Segment {
                pos: start - Vec2::new(i as f32 * config.segment_spacing, 0.0),
                direction: 0.0,
            })
            .collect();

        Self {
            segments,
            direction: 0.0,
            speed: config.worm_speed,
            segment_size: config.segment_size,
            segment_spacing: config.segment_spacing,
        }
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Advance the chain one tick. Does nothing when no direction is held.
    pub fn steer(&mut self, intent: &Intent, world: &World) {
        if !intent.is_moving() {
            return;
        }
        let Some(target) = target_direction(intent) else {
            return;
        };
        self.direction = target;

        let head = self.segments[0].pos;
        let stepped = head + heading_vector(target) * self.speed;
        let clamped = Vec2::new(
            stepped.x.clamp(self.segment_size, world.width - self.segment_size),
            stepped.y.clamp(self.segment_size, world.height - self.segment_size),
        );

        // Tail first, each chasing where its predecessor was before this tick
        for i in (1..self.segments.len()).rev() {
            let previous = self.segments[i - 1].pos;
            let segment = &mut self.segments[i];
            if segment.pos.distance(previous) <= self.segment_spacing {
                continue;
            }
            if let Some(dir) = direction(segment.pos, previous) {
                segment.direction = angle_between(segment.pos, previous);
                segment.pos += dir * self.speed;
            }
        }

        let head = &mut self.segments[0];
        head.pos = clamped;
        head.direction = target;
    }

    /// Append a segment on top of the tail (leaf eaten)
    pub fn grow(&mut self) {
        let tail = *self.tail();
        self.segments.push(tail);
    }

    /// Remove the tail segment, refusing to drop the head
    pub fn shrink(&mut self) -> Option<Segment> {
        if self.segments.len() > 1 {
            self.segments.pop()
        } else {
            None
        }
    }
}

/// 8-way heading for the held directions, `None` when idle.
///
/// Horizontal and vertical axes are resolved independently (right beats left,
/// up beats down); a held pair on both axes yields the diagonal.
pub fn target_direction(intent: &Intent) -> Option<f32> {
    let horizontal = if intent.move_right {
        Some(0.0)
    } else if intent.move_left {
        Some(PI)
    } else {
        None
    };
    // Vertical overrides horizontal on a single axis
    let vertical = if intent.move_up {
        Some(-FRAC_PI_2)
    } else if intent.move_down {
        Some(FRAC_PI_2)
    } else {
        None
    };

    match (intent.move_right, intent.move_left, intent.move_up, intent.move_down) {
        (true, _, true, _) => Some(-FRAC_PI_4),
        (true, _, _, true) => Some(FRAC_PI_4),
        (false, true, true, _) => Some(-3.0 * FRAC_PI_4),
        (false, true, _, true) => Some(3.0 * FRAC_PI_4),
        _ => vertical.or(horizontal),
    }
}
