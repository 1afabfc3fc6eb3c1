//! Chroma Drop - a color-matching ring-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, ring geometry, game state)
//!
//! Rendering, windowing and input decoding live outside this crate; the core
//! consumes semantic input events and exposes a per-tick snapshot.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Nominal fixed update rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Gravity applied to the ball every tick (world units per tick^2)
    pub const GRAVITY: f32 = -0.015;
    /// Vertical velocity set by a jump (overrides, never stacks)
    pub const JUMP_VELOCITY: f32 = 0.3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_SPAWN_Y: f32 = 0.5;

    /// Ring generation ranges
    pub const RING_OUTER_MIN: f32 = 3.5;
    pub const RING_OUTER_SPREAD: f32 = 3.0;
    pub const RING_THICKNESS_MIN: f32 = 0.8;
    pub const RING_THICKNESS_SPREAD: f32 = 0.7;
    /// Spin magnitude is RING_BASE_SPIN * (RING_REFERENCE_RADIUS / outer):
    /// smaller rings spin faster
    pub const RING_BASE_SPIN: f32 = 1.5;
    pub const RING_REFERENCE_RADIUS: f32 = 4.5;

    /// Vertical ring spacing: base plus uniform jitter in [0, JITTER)
    pub const RING_SPACING_BASE: f32 = 20.0;
    pub const RING_SPACING_JITTER: f32 = 4.0;
    /// Y of the first ring after a reset
    pub const FIRST_RING_Y: f32 = 5.0;
    /// Spawn a new ring once the frontier scrolls below this
    pub const SPAWN_AHEAD_Y: f32 = 15.0;

    /// Color changer pickup
    pub const COLOR_CHANGER_RADIUS: f32 = 0.35;
    /// A pickup spawns when the roll exceeds this (40% chance)
    pub const COLOR_CHANGER_SKIP_ROLL: f32 = 0.6;

    /// Entities below this are pruned
    pub const DESPAWN_Y: f32 = -20.0;
    /// Ball below this is out of bounds (world space, scroll-independent)
    pub const FALL_LIMIT_Y: f32 = -12.0;

    /// Default orthographic world extents (overridden on viewport resize)
    pub const WORLD_HALF_WIDTH: f32 = 10.0;
    pub const WORLD_HALF_HEIGHT: f32 = 20.0;

    /// Background star count
    pub const STAR_COUNT: usize = 80;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
