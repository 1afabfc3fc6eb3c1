//! Procedural level generation
//!
//! Rings spawn ahead of the ball with randomized size, spin and spacing, all
//! drawn from the session RNG so a seed fully determines the layout. Spacing
//! is base + jitter, so no two consecutive rings are ever closer than the
//! base spacing and the ring queue never runs dry.

use rand::Rng;

use super::ring::Ring;
use super::state::{ColorChanger, GameColor, GameState};
use crate::consts::*;

/// Spawn one ring at the given height, with a 40% chance of a color-changing
/// pickup halfway up the following gap.
pub fn spawn_ring(state: &mut GameState, y: f32) {
    let outer_radius = RING_OUTER_MIN + state.rng.random::<f32>() * RING_OUTER_SPREAD;
    let thickness = RING_THICKNESS_MIN + state.rng.random::<f32>() * RING_THICKNESS_SPREAD;
    let inner_radius = outer_radius - thickness;

    // Smaller rings spin faster; direction is a coin flip
    let direction = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let rotation_speed = RING_BASE_SPIN * (RING_REFERENCE_RADIUS / outer_radius) * direction;

    state
        .rings
        .push(Ring::new(y, inner_radius, outer_radius, rotation_speed));

    if state.rng.random::<f32>() > COLOR_CHANGER_SKIP_ROLL {
        let color = GameColor::random(&mut state.rng);
        state.color_changers.push(ColorChanger::new(
            y + RING_SPACING_BASE / 2.0,
            COLOR_CHANGER_RADIUS,
            color,
        ));
    }
}

/// Initial seeding after a reset: one ring at the fixed forward offset, then
/// two more at jittered spacing.
pub fn spawn_initial_rings(state: &mut GameState) {
    let mut y = FIRST_RING_Y;
    spawn_ring(state, y);
    for _ in 1..3 {
        y += next_spacing(state);
        spawn_ring(state, y);
    }
}

/// Steady-state spawning: once the furthest ring scrolls below the forward
/// visibility threshold, extend the level by one ring. At most one spawn per
/// tick keeps the layout stable against large scroll steps.
pub fn maintain_spawns(state: &mut GameState) {
    let Some(frontier_y) = state.rings.last().map(|r| r.y) else {
        return;
    };
    if frontier_y < SPAWN_AHEAD_Y {
        let spacing = next_spacing(state);
        spawn_ring(state, frontier_y + spacing);
    }
}

fn next_spacing(state: &mut GameState) -> f32 {
    RING_SPACING_BASE + state.rng.random::<f32>() * RING_SPACING_JITTER
}
