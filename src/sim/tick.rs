//! Fixed timestep simulation tick
//!
//! Advances the session deterministically in a fixed step order:
//! gravity/integration, anchor scroll, collision/scoring, ring rotation,
//! pruning, steady-state spawning. All motion constants are per-tick; the
//! caller drives this at the nominal rate and never passes a delta.

use super::collision::ball_in_ring_band;
use super::level;
use super::state::{GameColor, GamePhase, GameState};
use crate::consts::*;

/// Semantic input events at the core boundary. Key decoding happens outside;
/// the core only ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    ResetRequested,
    /// Not interpreted by the core; the shell forwards it to whoever owns the
    /// window. `TickInput::record` ignores it on purpose.
    ExitRequested,
}

/// Input commands for a single tick (deterministic, at most one pending jump)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub reset: bool,
}

impl TickInput {
    /// Record an edge-triggered event for the next tick
    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::Jump => self.jump = true,
            InputEvent::ResetRequested => self.reset = true,
            InputEvent::ExitRequested => {}
        }
    }

    /// Clear one-shot flags after a tick has consumed them
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Transitions that happened during a tick, for the shell to dispatch.
/// `GameOver` is emitted exactly once, on the transition frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score incremented by passing a ring
    RingPassed { score: u32 },
    /// A pickup was collected
    ColorChanged { color: GameColor },
    /// The run just ended
    GameOver { score: u32 },
}

/// Advance the game state by one fixed timestep.
///
/// Returns the transition events of this tick so the shell can react (end
/// screen, sound) without the core knowing about any UI.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Terminal state: frozen frame until an explicit reset
    if state.phase == GamePhase::GameOver {
        if input.reset {
            state.reset();
        }
        return events;
    }

    state.time_ticks += 1;

    if input.jump {
        // The first jump arms the collision pass below
        state.has_jumped = true;
        state.ball.jump(JUMP_VELOCITY);
    }
    state.ball.apply_gravity(GRAVITY);
    state.ball.integrate();
    state.stars.update();

    // Camera-follow illusion: the ball never rises above the anchor line;
    // the world scrolls down by the overshoot instead
    if state.ball.y > 0.0 {
        let dy = state.ball.y;
        state.ball.y = 0.0;
        state.scroll_offset += dy;
        for ring in &mut state.rings {
            ring.y -= dy;
        }
        for changer in &mut state.color_changers {
            changer.y -= dy;
        }
        state.stars.scroll(dy, &mut state.rng);
    }

    // Ring/pickup checks are inert until the first jump so the settling ball
    // can't lose before play begins
    if state.has_jumped {
        check_collisions(state, &mut events);
    }

    // Out of bounds is checked regardless of the jump gate: a ball that
    // simply falls off the bottom still ends the run
    if state.phase == GamePhase::Playing && state.ball.y < FALL_LIMIT_Y {
        state.phase = GamePhase::GameOver;
    }

    for ring in &mut state.rings {
        ring.advance_rotation();
    }

    state.rings.retain(|r| r.y >= DESPAWN_Y);
    state.color_changers.retain(|c| c.y >= DESPAWN_Y);

    level::maintain_spawns(state);

    if state.phase == GamePhase::GameOver {
        log::info!("game over at score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }
    events
}

/// The collision and scoring pass.
///
/// Rings are walked in insertion order; the first color mismatch ends the run
/// and short-circuits everything else this frame, including pickup checks.
/// A matching ring scores exactly once (`passed` latches).
fn check_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball_pos = state.ball.pos();
    for ring in &mut state.rings {
        if ball_in_ring_band(&state.ball, ring) {
            let segment = ring.segment_at_world_point(ball_pos);
            if segment != state.ball.color.index() {
                state.phase = GamePhase::GameOver;
                return;
            } else if !ring.passed {
                ring.passed = true;
                state.score += 1;
                log::debug!("ring passed, score {}", state.score);
                events.push(GameEvent::RingPassed { score: state.score });
            }
        }
    }

    for changer in &mut state.color_changers {
        if changer.collides_with(&state.ball) {
            let color = state.ball.change_color(&mut state.rng);
            // Consumed: park it below the despawn threshold so the prune
            // step removes it and it can't be collected twice
            changer.y = DESPAWN_Y - 1.0;
            log::debug!("color changed to {:?}", color);
            events.push(GameEvent::ColorChanged { color });
        }
    }
}
