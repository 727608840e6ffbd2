//! Invaders entry point
//!
//! Headless demo host: the autopilot plays on a virtual 60 Hz clock, frames
//! are drawn to a recording canvas and a JSON run summary is printed.
//!
//! Usage: `invaders [TUNING_JSON] [SEED]`

use std::sync::mpsc;

use anyhow::Context;
use serde::Serialize;

use invaders::renderer::RecordingCanvas;
use invaders::sim::{GameEvent, GameState, autopilot};
use invaders::{Game, Tuning};

/// Host frame rate (the simulation itself always ticks at 120 Hz)
const FRAME_DT: f64 = 1.0 / 60.0;
/// Simulated seconds before the demo gives up
const TIME_LIMIT_SECS: f64 = 180.0;
const DEFAULT_SEED: u64 = 0x1D_7A_DE;

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    ticks: u64,
    score: u64,
    level: u32,
    lives: u32,
    aliens_destroyed: u32,
    divers_destroyed: u32,
    shots_fired: u32,
    dives: u32,
    levels_cleared: u32,
    game_over: bool,
    /// Draw calls issued for the final frame
    last_frame_draws: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(&path),
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid seed {raw:?}"))?,
        None => DEFAULT_SEED,
    };

    log::info!("Invaders (headless demo) starting, seed {seed}");

    let (tx, rx) = mpsc::channel();
    let mut game = Game::new(GameState::new(tuning, seed), rx);
    let mut canvas = RecordingCanvas::new();
    let mut summary = RunSummary {
        seed,
        ..Default::default()
    };

    let mut now = 0.0;
    game.start(now);
    while now < TIME_LIMIT_SECS {
        for action in autopilot::plan(game.state()) {
            tx.send(action).context("input channel closed")?;
        }

        now += FRAME_DT;
        if !game.frame(now) {
            break;
        }
        summary.frames += 1;

        for event in game.drain_events() {
            log::debug!("{event:?}");
            match event {
                GameEvent::ShotFired => summary.shots_fired += 1,
                GameEvent::AlienDestroyed { was_diving, .. } => {
                    summary.aliens_destroyed += 1;
                    if was_diving {
                        summary.divers_destroyed += 1;
                    }
                }
                GameEvent::DiveStarted { .. } => summary.dives += 1,
                GameEvent::LevelCleared { .. } => summary.levels_cleared += 1,
                GameEvent::GameOver { score } => {
                    log::info!("Autopilot lost with {score} points");
                    summary.game_over = true;
                    game.stop();
                }
                _ => {}
            }
        }

        canvas.clear();
        game.render(&mut canvas);
    }
    game.stop();

    let state = game.state();
    summary.ticks = state.time_ticks;
    summary.score = state.score;
    summary.level = state.level;
    summary.lives = state.lives;
    summary.last_frame_draws = canvas.commands().len();

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
