//! Tick loop for headless and embedded hosts
//!
//! The simulation never schedules itself. A host either calls
//! [`Driver::step`] once per animation frame, or hands control to
//! [`Driver::run`], which loops until its [`StopToken`] is tripped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::consts::TICKS_PER_SECOND;
use crate::input::KeyboardAdapter;
use crate::sim::{GameState, TickReport, tick};

/// Cooperative stop flag shared between the loop and whoever wants it to end
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop after the current tick
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Totals for a `run` call
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub resets: u32,
    pub shots: u32,
    pub hostiles_killed: u32,
    pub damage_taken: u32,
    pub pickups_eaten: u32,
    /// Loop ended because the stop token was tripped
    pub stopped: bool,
}

impl RunSummary {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.resets += report.reset as u32;
        self.shots += report.fired as u32;
        self.hostiles_killed += report.collisions.hostiles_killed;
        self.damage_taken += report.collisions.damage_taken;
        self.pickups_eaten += report.collisions.pickups_eaten;
    }
}

/// Owns a game and the input adapter feeding it
#[derive(Debug)]
pub struct Driver {
    pub state: GameState,
    pub input: KeyboardAdapter,
    stop: StopToken,
}

impl Driver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            input: KeyboardAdapter::new(),
            stop: StopToken::new(),
        }
    }

    /// Handle for stopping [`Driver::run`] from elsewhere
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Sample input and advance one tick
    pub fn step(&mut self) -> TickReport {
        let intent = self.input.sample();
        tick(&mut self.state, &intent)
    }

    /// Tick until stopped or `max_ticks` elapse. With `realtime`, ticks are
    /// paced at [`TICKS_PER_SECOND`]; otherwise they run back to back.
    pub fn run(&mut self, max_ticks: Option<u64>, realtime: bool) -> RunSummary {
        let frame = Duration::from_secs(1) / TICKS_PER_SECOND;
        let mut summary = RunSummary::default();
        let mut next_frame = Instant::now();

        log::info!(
            "Driver starting ({}, limit {:?})",
            if realtime { "realtime" } else { "unpaced" },
            max_ticks
        );

        loop {
            if self.stop.is_stopped() {
                summary.stopped = true;
                break;
            }
            if max_ticks.is_some_and(|max| summary.ticks >= max) {
                break;
            }

            let report = self.step();
            summary.record(&report);

            if realtime {
                next_frame += frame;
                let now = Instant::now();
                if next_frame > now {
                    thread::sleep(next_frame - now);
                } else {
                    // Fell behind; don't try to catch up
                    next_frame = now;
                }
            }
        }

        log::info!(
            "Driver finished after {} ticks ({} resets)",
            summary.ticks,
            summary.resets
        );
        summary
    }
}
