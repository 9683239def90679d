//! Worm Chase headless runner
//!
//! Plays the simulation on autopilot with no renderer attached and reports
//! what happened. Useful for soak-testing balance changes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use worm_chase::{Driver, GameConfig, sim::GameState};

/// Run the worm simulation headless on autopilot
#[derive(Parser, Debug)]
#[command(name = "worm-chase")]
#[command(about = "Run the worm chase simulation without a renderer")]
struct Args {
    /// Ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pace ticks at 60 Hz instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let state = match GameState::try_new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Worm Chase (headless) starting, seed {}", state.config.seed);
    let mut driver = Driver::new(state);
    driver.input.set_autopilot(true);

    let summary = driver.run(Some(args.ticks), args.realtime);

    println!(
        "ticks={} resets={} shots={} kills={} damage={} leaves={} segments={}",
        summary.ticks,
        summary.resets,
        summary.shots,
        summary.hostiles_killed,
        summary.damage_taken,
        summary.pickups_eaten,
        driver.state.worm.len()
    );

    if args.json {
        match driver.state.snapshot_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize state: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
