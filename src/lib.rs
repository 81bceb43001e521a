//! Crimson Pong - a single-screen two-paddle ball game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, opponent, scoring, cosmetic effects)
//! - `tuning`: Data-driven game balance
//! - `input`: Pointer/keyboard adapter feeding the simulation
//! - `audio`: Sound trigger boundary
//! - `ui`: Overlay/score-text boundary
//! - `frame`: Host-side frame driver wiring the simulation to its sinks

pub mod audio;
pub mod frame;
pub mod input;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use frame::FrameDriver;
pub use input::{InputAdapter, InputEvent, Key};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 5.0;
    /// Per-frame velocity decay (very subtle)
    pub const BALL_FRICTION: f32 = 0.9999;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Opponent paddle starting gap from the right edge
    pub const OPPONENT_START_INSET: f32 = 50.0;

    /// Longitudinal speed multiplier when a paddle returns the ball
    pub const HIT_SPEED_GROWTH: f32 = 1.05;
    /// Vertical speed at the very edge of a paddle
    pub const HIT_VERTICAL_SENSITIVITY: f32 = 7.0;
    /// Fraction of paddle vertical speed added to the ball ("english")
    pub const PADDLE_ENGLISH: f32 = 0.2;
    /// Fraction of paddle vertical speed turned into lateral spin
    pub const PADDLE_SPIN: f32 = 0.1;
    pub const MAX_VERTICAL_SPEED: f32 = 10.0;

    /// Feedback timers (frames)
    pub const FLASH_FRAMES: u32 = 10;
    pub const SHAKE_FRAMES: u32 = 5;

    /// Combo gate uses wall-clock milliseconds, display decay uses frames
    pub const COMBO_COOLDOWN_MS: f64 = 200.0;
    pub const COMBO_DISPLAY_FRAMES: u32 = 120;

    pub const WINNING_SCORE: u32 = 5;

    /// Opponent controller
    pub const OPPONENT_VERTICAL_SPEED: f32 = 5.0;
    pub const OPPONENT_HORIZONTAL_SPEED: f32 = 3.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;
    pub const OPPONENT_LOOKAHEAD_FRAMES: f32 = 30.0;
    /// Closest the opponent retreats to the right edge (beyond its own width)
    pub const OPPONENT_RETREAT_INSET: f32 = 20.0;

    /// Cosmetic effects
    pub const HIT_BURST: usize = 10;
    pub const SCORE_BURST: usize = 20;
    pub const PARTICLE_LIFE: u32 = 20;
    pub const BLEED_FRAMES: u32 = 60;
    pub const BLOOD_DROP_INTERVAL: u32 = 5;

    /// Post-game-over animation
    pub const WINNER_SPIN_DEGREES: f32 = 10.0;
    pub const BROKEN_FALL_GRAVITY: f32 = 0.5;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
