//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ring::Ring;
use super::starfield::StarField;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (color mismatch or fell out of bounds); terminal until reset
    GameOver,
}

/// The four-entry palette shared by ball, ring segments and pickups.
///
/// The discriminant is the canonical identity of a color: ring segment `k`
/// is permanently `GameColor::from_index(k)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameColor {
    Cyan = 0,
    Yellow = 1,
    Magenta = 2,
    Purple = 3,
}

impl GameColor {
    pub const ALL: [GameColor; 4] = [
        GameColor::Cyan,
        GameColor::Yellow,
        GameColor::Magenta,
        GameColor::Purple,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// RGB triple for rendering
    pub fn rgb(self) -> [f32; 3] {
        match self {
            GameColor::Cyan => [0.0, 1.0, 1.0],
            GameColor::Yellow => [1.0, 1.0, 0.0],
            GameColor::Magenta => [1.0, 0.0, 1.0],
            GameColor::Purple => [0.5, 0.0, 1.0],
        }
    }

    /// Uniform pick over the whole palette
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::from_index(rng.random_range(0..4))
    }

    /// Uniform pick over the three colors that differ from `self`.
    /// Never returns `self`.
    pub fn random_other(self, rng: &mut Pcg32) -> Self {
        Self::from_index(self.index() + 1 + rng.random_range(0..3))
    }
}

/// The player's ball. Horizontally fixed at x = 0 by design; only `y` moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBall {
    pub y: f32,
    pub radius: f32,
    pub velocity_y: f32,
    pub color: GameColor,
}

impl PlayerBall {
    pub fn new(y: f32, radius: f32, color: GameColor) -> Self {
        Self {
            y,
            radius,
            velocity_y: 0.0,
            color,
        }
    }

    /// World position (x is always 0)
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(0.0, self.y)
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
    }

    /// Set vertical velocity outright; jumps override instead of stacking
    pub fn jump(&mut self, velocity: f32) {
        self.velocity_y = velocity;
    }

    /// Fixed-step Euler integration; call after `apply_gravity` each tick
    pub fn integrate(&mut self) {
        self.y += self.velocity_y;
    }

    /// Switch to a uniformly random color guaranteed to differ from the
    /// current one. Returns the new color.
    pub fn change_color(&mut self, rng: &mut Pcg32) -> GameColor {
        self.color = self.color.random_other(rng);
        self.color
    }
}

/// A color-changing pickup on the vertical centerline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorChanger {
    pub y: f32,
    pub radius: f32,
    /// Cosmetic only; the granted color is rolled on collection
    pub color: GameColor,
}

impl ColorChanger {
    pub fn new(y: f32, radius: f32, color: GameColor) -> Self {
        Self { y, radius, color }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(0.0, self.y)
    }

    /// Circle-circle overlap with the ball. Discrete test only; tunneling at
    /// high relative speed is an accepted limitation.
    pub fn collides_with(&self, ball: &PlayerBall) -> bool {
        super::collision::circles_overlap(self.pos(), self.radius, ball.pos(), ball.radius)
    }
}

/// Orthographic world extents, supplied by the shell on viewport resize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min_x: -WORLD_HALF_WIDTH,
            max_x: WORLD_HALF_WIDTH,
            min_y: -WORLD_HALF_HEIGHT,
            max_y: WORLD_HALF_HEIGHT,
        }
    }
}

impl WorldBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw (level generation, colors, star
    /// respawns) comes from this single stream
    pub rng: Pcg32,
    /// Rings passed so far
    pub score: u32,
    pub phase: GamePhase,
    /// Set on the first jump; ring/pickup collision checks are inert until
    /// then so the ball can settle at spawn without a spurious game over
    pub has_jumped: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Total world-scroll applied so far (camera-follow accumulator)
    pub scroll_offset: f32,
    pub ball: PlayerBall,
    /// Traversal order = insertion order; this is a contract (the first
    /// mismatching ring in insertion order wins), so never sort these
    pub rings: Vec<Ring>,
    pub color_changers: Vec<ColorChanger>,
    /// Cosmetic background; not part of the replay state
    #[serde(skip)]
    pub stars: StarField,
    pub bounds: WorldBounds,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = WorldBounds::default();
        let ball_color = GameColor::random(&mut rng);
        let stars = StarField::new(STAR_COUNT, bounds, &mut rng);

        let mut state = Self {
            seed,
            rng,
            score: 0,
            phase: GamePhase::Playing,
            has_jumped: false,
            time_ticks: 0,
            scroll_offset: 0.0,
            ball: PlayerBall::new(BALL_SPAWN_Y, BALL_RADIUS, ball_color),
            rings: Vec::new(),
            color_changers: Vec::new(),
            stars,
            bounds,
        };
        super::level::spawn_initial_rings(&mut state);
        state
    }

    /// Full session re-initialization: new ball with a fresh random color,
    /// empty entity lists, score 0, initial spawn re-run. The RNG stream
    /// keeps advancing so a reset run still differs from the previous one.
    pub fn reset(&mut self) {
        let color = GameColor::random(&mut self.rng);
        self.ball = PlayerBall::new(BALL_SPAWN_Y, BALL_RADIUS, color);
        self.rings.clear();
        self.color_changers.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.has_jumped = false;
        self.scroll_offset = 0.0;
        super::level::spawn_initial_rings(self);
        log::info!("session reset (seed {})", self.seed);
    }

    /// Consume new orthographic extents from the shell (viewport resize)
    pub fn set_world_bounds(&mut self, bounds: WorldBounds) {
        self.bounds = bounds;
        self.stars.set_bounds(bounds, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_color_index_round_trip() {
        for color in GameColor::ALL {
            assert_eq!(GameColor::from_index(color.index()), color);
        }
        assert_eq!(GameColor::from_index(5), GameColor::Yellow);
    }

    #[test]
    fn test_ball_gravity_then_integrate() {
        let mut ball = PlayerBall::new(0.5, 0.5, GameColor::Cyan);
        ball.jump(0.3);
        let mut expected_y = 0.5;
        for k in 1..=40u32 {
            ball.apply_gravity(-0.015);
            ball.integrate();
            let expected_v = 0.3 - 0.015 * k as f32;
            expected_y += expected_v;
            assert!((ball.velocity_y - expected_v).abs() < 1e-5);
            assert!((ball.y - expected_y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut ball = PlayerBall::new(0.0, 0.5, GameColor::Cyan);
        ball.velocity_y = -2.0;
        ball.jump(0.3);
        assert_eq!(ball.velocity_y, 0.3);
    }

    proptest! {
        #[test]
        fn prop_change_color_never_fixed_point(seed in any::<u64>()) {
            let mut rng = test_rng(seed);
            let mut ball = PlayerBall::new(0.0, 0.5, GameColor::random(&mut rng));
            for _ in 0..64 {
                let before = ball.color;
                let after = ball.change_color(&mut rng);
                prop_assert_ne!(before, after);
                prop_assert_eq!(after, ball.color);
            }
        }

        #[test]
        fn prop_random_other_uniform_support(seed in any::<u64>()) {
            // Every non-current color must be reachable
            let mut rng = test_rng(seed);
            for current in GameColor::ALL {
                let mut seen = [false; 4];
                for _ in 0..256 {
                    seen[current.random_other(&mut rng).index()] = true;
                }
                prop_assert!(!seen[current.index()]);
                prop_assert_eq!(seen.iter().filter(|s| **s).count(), 3);
            }
        }
    }

    #[test]
    fn test_set_world_bounds_follows_resize() {
        let mut state = GameState::new(3);
        let taller = WorldBounds {
            min_x: -10.0,
            max_x: 10.0,
            min_y: -16.0,
            max_y: 16.0,
        };
        state.set_world_bounds(taller);
        assert_eq!(state.bounds, taller);
        for star in state.stars.stars() {
            assert!(star.pos.y >= taller.min_y && star.pos.y <= taller.max_y);
        }
    }

    #[test]
    fn test_reset_reinitializes_session() {
        let mut state = GameState::new(7);
        state.score = 9;
        state.phase = GamePhase::GameOver;
        state.has_jumped = true;
        state.scroll_offset = 42.0;
        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.has_jumped);
        assert_eq!(state.scroll_offset, 0.0);
        assert_eq!(state.ball.y, crate::consts::BALL_SPAWN_Y);
        assert_eq!(state.rings.len(), 3);
    }
}
