//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (motion constants are per-tick, never time-scaled)
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (ring/pickup traversal = insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod ring;
pub mod snapshot;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{ball_in_ring_band, circles_overlap};
pub use ring::Ring;
pub use snapshot::{BallView, PickupView, RingView, Snapshot, StarView};
pub use starfield::{Star, StarField};
pub use state::{ColorChanger, GameColor, GamePhase, GameState, PlayerBall, WorldBounds};
pub use tick::{GameEvent, InputEvent, TickInput, tick};
