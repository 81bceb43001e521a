//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - One tick per rendered frame, no internal clock
//! - Seeded RNG only (cosmetics)
//! - No rendering, audio or DOM dependencies; hosts read events and snapshots

pub mod collision;
pub mod effects;
pub mod opponent;
pub mod physics;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_overlaps_rect, circles_overlap, paddle_band_hit};
pub use snapshot::{RenderSink, Snapshot};
pub use state::{
    Ball, BloodDrop, GameEvent, GamePhase, GameState, MatchState, Obstacle, Paddle, Particle,
    Side, Stain, Tint,
};
pub use tick::{TickInput, tick};
