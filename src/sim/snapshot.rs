//! Read-only render snapshot
//!
//! The renderer never touches live simulation state. Each frame the shell
//! takes an owned `Snapshot` and draws from that, which makes the
//! single-writer/single-reader handoff explicit: a render thread holding the
//! previous frame's snapshot can never observe a half-updated tick.

use glam::Vec2;
use serde::Serialize;

use super::state::{GameColor, GamePhase, GameState};

/// Drawable view of the player ball
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: GameColor,
}

/// Drawable view of one ring
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RingView {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Degrees; the renderer rotates the whole ring by this
    pub rotation: f32,
    /// Segment k spans local angle [k*90, (k+1)*90) and wears colors[k]
    pub segment_colors: [GameColor; 4],
}

/// Drawable view of a color-changer pickup
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PickupView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: GameColor,
}

/// Drawable view of a background star
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StarView {
    pub pos: Vec2,
    pub brightness: f32,
}

/// Immutable per-frame snapshot of everything drawable
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub rings: Vec<RingView>,
    pub pickups: Vec<PickupView>,
    pub stars: Vec<StarView>,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Capture an owned snapshot of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: BallView {
                pos: self.ball.pos(),
                radius: self.ball.radius,
                color: self.ball.color,
            },
            rings: self
                .rings
                .iter()
                .map(|r| RingView {
                    center: r.center(),
                    inner_radius: r.inner_radius,
                    outer_radius: r.outer_radius,
                    rotation: r.current_angle,
                    segment_colors: GameColor::ALL,
                })
                .collect(),
            pickups: self
                .color_changers
                .iter()
                .map(|c| PickupView {
                    pos: c.pos(),
                    radius: c.radius,
                    color: c.color,
                })
                .collect(),
            stars: self
                .stars
                .stars()
                .iter()
                .map(|s| StarView {
                    pos: s.pos,
                    brightness: s.brightness(),
                })
                .collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}
