//! Chroma Drop headless demo driver
//!
//! Free-runs the simulation core without a renderer or pacing: a
//! tiny autopilot taps jump to keep the ball climbing, events are logged as
//! they fire, and the session restarts after each game over. Useful for
//! eyeballing the generator and for soak-testing determinism from a seed.
//!
//! Usage: chroma-drop [SEED] [RUNS]
//! Set CHROMA_DUMP=1 to print the final state as JSON.

use chroma_drop::consts::TICK_RATE_HZ;
use chroma_drop::sim::{GameEvent, GamePhase, GameState, InputEvent, TickInput, tick};

/// Hard cap so a lucky autopilot cannot loop forever
const MAX_TICKS: u64 = 60 * 60 * TICK_RATE_HZ as u64;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| std::time::UNIX_EPOCH.elapsed().map_or(0, |d| d.as_secs()));
    let runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    log::info!("chroma-drop headless demo, seed {seed}, {runs} runs");

    let mut state = GameState::new(seed);
    let mut input = TickInput::default();
    let mut runs_done = 0;

    let mut ticks = 0u64;
    while runs_done < runs && ticks < MAX_TICKS {
        ticks += 1;

        // Autopilot: tap jump whenever the ball starts to sink. This keeps it
        // hovering at the anchor line so the world scrolls steadily; it makes
        // no attempt to match colors and dies to the first unlucky segment.
        if state.phase == GamePhase::Playing && state.ball.velocity_y < 0.0 {
            input.record(InputEvent::Jump);
        }

        let events = tick(&mut state, &input);
        // One-shot flags are consumed; events below may queue the next reset
        input.clear();
        for event in events {
            match event {
                GameEvent::RingPassed { score } => log::info!("score: {score}"),
                GameEvent::ColorChanged { color } => log::debug!("picked up {color:?}"),
                GameEvent::GameOver { score } => {
                    runs_done += 1;
                    log::info!("run {runs_done} over, final score {score}");
                    if runs_done < runs {
                        input.record(InputEvent::ResetRequested);
                    }
                }
            }
        }
    }

    let snapshot = state.snapshot();
    println!(
        "finished after {ticks} ticks: {} runs, last score {}, {} rings live",
        runs_done,
        snapshot.score,
        snapshot.rings.len()
    );

    if std::env::var_os("CHROMA_DUMP").is_some() {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }
}
