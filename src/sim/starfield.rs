//! Cosmetic parallax star background
//!
//! Stars live in world space inside the current bounds, twinkle each tick and
//! scroll with the world at a per-star depth factor. They are visual only:
//! excluded from serialization and from every gameplay decision.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::WorldBounds;

/// Twinkle phase advance per tick
const TWINKLE_STEP: f32 = 0.05;

/// A single background star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
    /// Parallax depth in [0.3, 1): deeper stars scroll slower
    pub depth: f32,
    /// Twinkle phase in radians
    pub twinkle: f32,
}

impl Star {
    /// Brightness in [0, 1] for rendering
    pub fn brightness(&self) -> f32 {
        0.55 + 0.45 * self.twinkle.sin()
    }
}

/// The whole background field
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
    bounds: WorldBounds,
}

impl StarField {
    pub fn new(count: usize, bounds: WorldBounds, rng: &mut Pcg32) -> Self {
        let stars = (0..count).map(|_| Self::spawn_star(bounds, rng)).collect();
        Self { stars, bounds }
    }

    fn spawn_star(bounds: WorldBounds, rng: &mut Pcg32) -> Star {
        Star {
            pos: Vec2::new(
                bounds.min_x + rng.random::<f32>() * bounds.width(),
                bounds.min_y + rng.random::<f32>() * bounds.height(),
            ),
            depth: 0.3 + rng.random::<f32>() * 0.7,
            twinkle: rng.random::<f32>() * std::f32::consts::TAU,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Advance twinkle phases by one tick
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.twinkle = (star.twinkle + TWINKLE_STEP * star.depth) % std::f32::consts::TAU;
        }
    }

    /// Scroll with the world by `dy`, scaled per star by its depth. Stars
    /// leaving the bottom re-enter at the top at a fresh horizontal position.
    pub fn scroll(&mut self, dy: f32, rng: &mut Pcg32) {
        let bounds = self.bounds;
        for star in &mut self.stars {
            star.pos.y -= dy * star.depth;
            if star.pos.y < bounds.min_y {
                star.pos.y += bounds.height();
                star.pos.x = bounds.min_x + rng.random::<f32>() * bounds.width();
            }
        }
    }

    /// Follow a viewport resize; stars now outside are respawned inside
    pub fn set_bounds(&mut self, bounds: WorldBounds, rng: &mut Pcg32) {
        self.bounds = bounds;
        for star in &mut self.stars {
            let outside = star.pos.x < bounds.min_x
                || star.pos.x > bounds.max_x
                || star.pos.y < bounds.min_y
                || star.pos.y > bounds.max_y;
            if outside {
                *star = Self::spawn_star(bounds, rng);
            }
        }
    }
}
