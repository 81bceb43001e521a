//! Data-driven game balance
//!
//! Every gameplay constant lives here so hosts can load a JSON file instead of
//! recompiling. Missing fields fall back to [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::Obstacle;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub ball_friction: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub opponent_start_inset: f32,

    // === Paddle hits ===
    pub hit_speed_growth: f32,
    pub hit_vertical_sensitivity: f32,
    pub paddle_english: f32,
    pub paddle_spin: f32,
    pub max_vertical_speed: f32,

    // === Feedback timers (frames) ===
    pub flash_frames: u32,
    pub shake_frames: u32,

    // === Combo ===
    /// Wall-clock window between paddle hits (milliseconds)
    pub combo_cooldown_ms: f64,
    /// How long the combo counter stays visible (frames)
    pub combo_display_frames: u32,

    // === Match ===
    pub winning_score: u32,

    // === Opponent ===
    pub opponent_vertical_speed: f32,
    pub opponent_horizontal_speed: f32,
    pub opponent_dead_zone: f32,
    pub opponent_lookahead_frames: f32,
    pub opponent_retreat_inset: f32,
    /// Furthest the opponent advances from the right edge
    pub opponent_advance_distance: f32,

    // === Cosmetics ===
    pub hit_burst: usize,
    pub score_burst: usize,
    pub particle_life: u32,
    pub bleed_frames: u32,
    pub blood_drop_interval: u32,
    pub winner_spin_degrees: f32,
    pub broken_fall_gravity: f32,

    /// Static deflectors on the court
    pub obstacles: Vec<Obstacle>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            ball_radius: BALL_RADIUS,
            serve_speed: SERVE_SPEED,
            ball_friction: BALL_FRICTION,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            opponent_start_inset: OPPONENT_START_INSET,

            hit_speed_growth: HIT_SPEED_GROWTH,
            hit_vertical_sensitivity: HIT_VERTICAL_SENSITIVITY,
            paddle_english: PADDLE_ENGLISH,
            paddle_spin: PADDLE_SPIN,
            max_vertical_speed: MAX_VERTICAL_SPEED,

            flash_frames: FLASH_FRAMES,
            shake_frames: SHAKE_FRAMES,

            combo_cooldown_ms: COMBO_COOLDOWN_MS,
            combo_display_frames: COMBO_DISPLAY_FRAMES,

            winning_score: WINNING_SCORE,

            opponent_vertical_speed: OPPONENT_VERTICAL_SPEED,
            opponent_horizontal_speed: OPPONENT_HORIZONTAL_SPEED,
            opponent_dead_zone: OPPONENT_DEAD_ZONE,
            opponent_lookahead_frames: OPPONENT_LOOKAHEAD_FRAMES,
            opponent_retreat_inset: OPPONENT_RETREAT_INSET,
            opponent_advance_distance: COURT_WIDTH / 4.0,

            hit_burst: HIT_BURST,
            score_burst: SCORE_BURST,
            particle_life: PARTICLE_LIFE,
            bleed_frames: BLEED_FRAMES,
            blood_drop_interval: BLOOD_DROP_INTERVAL,
            winner_spin_degrees: WINNER_SPIN_DEGREES,
            broken_fall_gravity: BROKEN_FALL_GRAVITY,

            obstacles: Vec::new(),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for dumping a starter file)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Repair values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.court_width <= 0.0 || self.court_height <= 0.0 {
            log::warn!(
                "Invalid court size {}x{}, using defaults",
                self.court_width,
                self.court_height
            );
            self.court_width = defaults.court_width;
            self.court_height = defaults.court_height;
        }
        if self.paddle_width <= 0.0 || self.paddle_width > self.court_width / 2.0 {
            log::warn!("Invalid paddle width {}, using default", self.paddle_width);
            self.paddle_width = defaults.paddle_width.min(self.court_width / 2.0);
        }
        if self.paddle_height <= 0.0 || self.paddle_height > self.court_height {
            log::warn!("Invalid paddle height {}, using default", self.paddle_height);
            self.paddle_height = defaults.paddle_height.min(self.court_height);
        }
        if self.ball_radius <= 0.0 {
            log::warn!("Invalid ball radius {}, using default", self.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !(0.0..=1.0).contains(&self.ball_friction) {
            log::warn!("Ball friction {} out of range, using default", self.ball_friction);
            self.ball_friction = defaults.ball_friction;
        }
        if self.hit_speed_growth < 1.0 {
            log::warn!("Hit speed growth {} below 1, clamping", self.hit_speed_growth);
            self.hit_speed_growth = 1.0;
        }
        if self.max_vertical_speed <= 0.0 {
            self.max_vertical_speed = defaults.max_vertical_speed;
        }
        if self.winning_score == 0 {
            log::warn!("Winning score of 0, using default");
            self.winning_score = defaults.winning_score;
        }
        if self.blood_drop_interval == 0 {
            self.blood_drop_interval = 1;
        }
        self
    }

    /// Court centre, where the ball is placed for every serve
    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Horizontal midpoint of the court
    pub fn midpoint_x(&self) -> f32 {
        self.court_width / 2.0
    }

    /// Lowest allowed paddle top (y grows downward)
    pub fn max_paddle_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Rightmost allowed paddle left edge
    pub fn max_paddle_x(&self) -> f32 {
        self.court_width - self.paddle_width
    }
}
