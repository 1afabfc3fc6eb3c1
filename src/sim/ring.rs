//! Rotating ring geometry and segment classification
//!
//! A ring is an annulus centered on the vertical axis at height `y`, divided
//! into four fixed 90-degree segments in cyclic palette order. The whole ring
//! rotates by `rotation_speed` degrees per tick; segment classification undoes
//! that rotation to find which segment currently occupies a world angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameColor;
use crate::wrap_degrees;

/// A rotating four-segment ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    /// Center height in world space (x is always 0)
    pub y: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Signed degrees per tick; negative spins clockwise
    pub rotation_speed: f32,
    /// Current rotation, kept in [0, 360)
    pub current_angle: f32,
    /// Set the first frame the ball crosses the band with a matching color;
    /// never reset, so a ring scores at most once
    pub passed: bool,
}

impl Ring {
    pub fn new(y: f32, inner_radius: f32, outer_radius: f32, rotation_speed: f32) -> Self {
        Self {
            y,
            inner_radius,
            outer_radius,
            rotation_speed,
            current_angle: 0.0,
            passed: false,
        }
    }

    /// Ring center in world space
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(0.0, self.y)
    }

    /// Advance rotation by one tick, wrapping in both directions
    pub fn advance_rotation(&mut self) {
        self.current_angle = wrap_degrees(self.current_angle + self.rotation_speed);
    }

    /// Which segment occupies the world point right now.
    ///
    /// This is the collision oracle: it must exactly mirror the drawn layout,
    /// where segment k spans local angle [k*90, (k+1)*90) before rotation and
    /// the rotation shifts every segment forward by `current_angle`. Hence the
    /// subtraction to recover the local angle.
    pub fn segment_at_world_point(&self, point: Vec2) -> usize {
        let rel = point - self.center();
        let world_angle = wrap_degrees(rel.y.atan2(rel.x).to_degrees());
        let local_angle = wrap_degrees(world_angle - self.current_angle);
        // min guards the float edge where local_angle lands on 360-epsilon
        ((local_angle / 90.0) as usize).min(3)
    }

    /// Palette color of a segment index (fixed cyclic order)
    #[inline]
    pub fn segment_color(segment: usize) -> GameColor {
        GameColor::from_index(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn point_at(ring: &Ring, radius: f32, world_deg: f32) -> Vec2 {
        let rad = world_deg.to_radians();
        ring.center() + Vec2::new(radius * rad.cos(), radius * rad.sin())
    }

    #[test]
    fn test_segments_unrotated() {
        let ring = Ring::new(5.0, 3.0, 4.0, 0.0);
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 45.0)), 0);
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 135.0)), 1);
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 225.0)), 2);
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 315.0)), 3);
        // Bucket boundaries are half-open
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 0.0)), 0);
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 90.0)), 1);
    }

    #[test]
    fn test_rotation_shifts_segments_forward() {
        let mut ring = Ring::new(0.0, 3.0, 4.0, 0.0);
        ring.current_angle = 90.0;
        // Segment 0 has rotated into the [90, 180) world quadrant
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 135.0)), 0);
        assert_eq!(ring.segment_at_world_point(point_at(&ring, 3.5, 45.0)), 3);
    }

    #[test]
    fn test_full_turn_invariance() {
        // 360-degree multiples are exactly representable, so classification
        // must agree exactly
        let probe = [10.0, 45.0, 100.0, 181.0, 269.5, 350.0];
        for base in [0.0, 30.0, 127.0, 359.0] {
            for k in [-2.0f32, -1.0, 1.0, 2.0, 3.0] {
                let mut a = Ring::new(2.0, 3.0, 4.0, 0.0);
                let mut b = a.clone();
                a.current_angle = base;
                b.current_angle = base + 360.0 * k;
                for &deg in &probe {
                    let p = point_at(&a, 3.5, deg);
                    assert_eq!(
                        a.segment_at_world_point(p),
                        b.segment_at_world_point(p),
                        "base {base} k {k} deg {deg}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_advance_rotation_wraps_both_directions() {
        let mut ring = Ring::new(0.0, 3.0, 4.0, 50.0);
        ring.current_angle = 340.0;
        ring.advance_rotation();
        assert!((ring.current_angle - 30.0).abs() < 1e-4);

        let mut ring = Ring::new(0.0, 3.0, 4.0, -50.0);
        ring.current_angle = 20.0;
        ring.advance_rotation();
        assert!((ring.current_angle - 330.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_segment_in_range(
            world_deg in 0.0f32..360.0,
            angle in -720.0f32..720.0,
            y in -15.0f32..15.0,
        ) {
            let mut ring = Ring::new(y, 3.0, 4.0, 0.0);
            ring.current_angle = angle;
            let p = point_at(&ring, 3.5, world_deg);
            prop_assert!(ring.segment_at_world_point(p) < 4);
        }

        #[test]
        fn prop_angle_stays_normalized(
            speed in -10.0f32..10.0,
            ticks in 0usize..500,
        ) {
            let mut ring = Ring::new(0.0, 3.0, 4.0, speed);
            for _ in 0..ticks {
                ring.advance_rotation();
            }
            prop_assert!(ring.current_angle >= 0.0 && ring.current_angle < 360.0);
        }
    }
}
