//! Collision predicates for the ball, rings and pickups
//!
//! The tricky part of Chroma Drop: deciding when the ball is "in" a rotating
//! ring. The ring band is the annulus between inner and outer radius, widened
//! on both edges by the ball's radius as a tolerance band. Checks are discrete
//! per tick; a fast enough ball can tunnel straight through a thin ring, which
//! is an accepted limitation of the fidelity contract.

use glam::Vec2;

use super::ring::Ring;
use super::state::PlayerBall;

/// Circle-circle overlap (strict: touching circles do not collide)
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// True when the ball overlaps the ring's annular band.
///
/// The band is widened by the ball radius on both edges, so the ball counts as
/// "in the ring" as soon as it touches either rim.
pub fn ball_in_ring_band(ball: &PlayerBall, ring: &Ring) -> bool {
    let dist = ball.pos().distance(ring.center());
    dist > ring.inner_radius - ball.radius && dist < ring.outer_radius + ball.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameColor;

    fn ball_at(y: f32) -> PlayerBall {
        PlayerBall::new(y, 0.5, GameColor::Cyan)
    }

    #[test]
    fn test_ball_in_band_from_below() {
        let ring = Ring::new(5.0, 3.0, 4.0, 0.0);

        // Well below the ring: distance 5.0 > outer 4.0 + ball 0.5
        assert!(!ball_in_ring_band(&ball_at(0.0), &ring));
        // Just touching the widened outer rim (distance 4.4 < 4.5)
        assert!(ball_in_ring_band(&ball_at(0.6), &ring));
        // Inside the band proper
        assert!(ball_in_ring_band(&ball_at(1.5), &ring));
        // Through to the hole: distance 2.0 < inner 3.0 - ball 0.5
        assert!(!ball_in_ring_band(&ball_at(3.0), &ring));
    }

    #[test]
    fn test_ball_in_band_symmetric_above() {
        let ring = Ring::new(5.0, 3.0, 4.0, 0.0);
        assert!(ball_in_ring_band(&ball_at(8.5), &ring));
        assert!(!ball_in_ring_band(&ball_at(10.0), &ring));
    }

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 0.5, Vec2::new(0.0, 0.7), 0.35));
        assert!(!circles_overlap(a, 0.5, Vec2::new(0.0, 1.0), 0.35));
        assert!(circles_overlap(a, 0.5, Vec2::new(0.3, 0.3), 0.35));
    }

    #[test]
    fn test_color_changer_overlap_via_entity() {
        use crate::sim::state::ColorChanger;
        let changer = ColorChanger::new(1.0, 0.35, GameColor::Purple);
        assert!(changer.collides_with(&ball_at(0.3)));
        assert!(!changer.collides_with(&ball_at(-0.5)));
    }
}
