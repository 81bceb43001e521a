//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one [`GameState`] context
//! object, so several independent matches can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Computer-controlled paddle on the right half
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball parked at centre, player aiming
    Serving,
    /// Ball in play
    Rallying,
    /// Someone reached the winning score
    GameOver,
}

/// Colour tag for score-related cosmetics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// Opponent scored (ball left past the player)
    Red,
    /// Player scored
    Blue,
}

impl Tint {
    /// Tint used when `scorer` wins a point
    pub fn for_scorer(scorer: Side) -> Self {
        match scorer {
            Side::Player => Tint::Blue,
            Side::Opponent => Tint::Red,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Lateral drift added to x every frame
    pub spin: f32,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.court_center(),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
            spin: 0.0,
        }
    }

    /// Park the ball at the court centre with no motion
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = tuning.court_center();
        self.vel = Vec2::ZERO;
        self.spin = 0.0;
    }
}

/// A paddle (player or opponent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Rotation in degrees (only animated after game over)
    pub angle: f32,
    /// Frames left of the hit flash
    pub flash: u32,
    /// Split/falling animation after losing the match
    pub broken: bool,
    pub fall_speed: f32,
    /// Vertical movement during the last frame (for "english")
    pub vertical_speed: f32,
    last_y: f32,
}

impl Paddle {
    /// Player paddle: left edge, vertically centred
    pub fn player(tuning: &Tuning) -> Self {
        Self::at(Side::Player, 0.0, tuning)
    }

    /// Opponent paddle: inset from the right edge, vertically centred
    pub fn opponent(tuning: &Tuning) -> Self {
        let x = tuning.court_width - tuning.paddle_width - tuning.opponent_start_inset;
        Self::at(Side::Opponent, x, tuning)
    }

    fn at(side: Side, x: f32, tuning: &Tuning) -> Self {
        let y = tuning.court_height / 2.0 - tuning.paddle_height / 2.0;
        Self {
            side,
            pos: Vec2::new(x, y),
            size: Vec2::new(tuning.paddle_width, tuning.paddle_height),
            angle: 0.0,
            flash: 0,
            broken: false,
            fall_speed: 0.0,
            vertical_speed: 0.0,
            last_y: y,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Centre the paddle on a pointer position, clamped to the whole court
    pub fn follow_pointer(&mut self, pointer: Vec2, tuning: &Tuning) {
        self.pos = pointer - self.size / 2.0;
        self.pos.x = self.pos.x.clamp(0.0, tuning.max_paddle_x());
        self.pos.y = self.pos.y.clamp(0.0, tuning.max_paddle_y());
    }

    /// Record how far the paddle moved vertically since the last sample
    pub fn sample_vertical_speed(&mut self) {
        self.vertical_speed = self.pos.y - self.last_y;
        self.last_y = self.pos.y;
    }

    /// Count down the hit flash
    pub fn tick_flash(&mut self) {
        self.flash = self.flash.saturating_sub(1);
    }
}

/// Short-lived spark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Frames until removal
    pub life: u32,
    pub tint: Option<Tint>,
}

/// Persistent splat left where a point was scored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stain {
    pub pos: Vec2,
    pub radius: f32,
    pub tint: Tint,
}

/// Drop falling from a bleeding opponent paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodDrop {
    pub pos: Vec2,
    pub speed: f32,
}

/// Static round deflector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: f32,
}

/// Score, serve and combo bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    /// Ball parked, waiting for the serve trigger
    pub serving: bool,
    pub game_over: bool,
    /// Aim angle (radians) from the player paddle centre to the ball
    pub serve_angle: f32,
    pub combo: u32,
    /// Frames left before the combo display expires
    pub combo_timer: u32,
    /// Wall-clock time (ms) of the previous paddle hit
    pub last_hit_ms: Option<f64>,
    pub winner: Option<Side>,
    /// Orthogonal to the phase: freezes every tick while set
    pub paused: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            serving: true,
            game_over: false,
            serve_angle: 0.0,
            combo: 0,
            combo_timer: 0,
            last_hit_ms: None,
            winner: None,
            paused: false,
        }
    }
}

impl MatchState {
    /// Game over wins over serving (the ball is parked after the final point)
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.serving {
            GamePhase::Serving
        } else {
            GamePhase::Rallying
        }
    }
}

/// Discrete things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce { pos: Vec2 },
    /// Ball struck a paddle
    PaddleHit { side: Side, pos: Vec2 },
    /// Ball deflected off an obstacle
    ObstacleBounce { pos: Vec2 },
    /// Ball launched from the serve
    Served { angle: f32 },
    /// A point was scored
    Scored {
        scorer: Side,
        pos: Vec2,
        player_score: u32,
        opponent_score: u32,
    },
    /// Combo counter went up
    Combo { count: u32 },
    GameOver { winner: Side },
    Paused,
    Resumed,
    Restarted,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub stains: Vec<Stain>,
    pub blood_drops: Vec<BloodDrop>,
    /// Frames left of opponent bleeding
    pub bleed_timer: u32,
    /// Frames left of screen shake
    pub screen_shake: u32,
    pub match_state: MatchState,
    /// Simulated (unpaused) frame counter
    pub frame: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new match in the serving state. `seed` only drives cosmetics.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            ball: Ball::new(&tuning),
            player: Paddle::player(&tuning),
            opponent: Paddle::opponent(&tuning),
            obstacles: tuning.obstacles.clone(),
            particles: Vec::new(),
            stains: Vec::new(),
            blood_drops: Vec::new(),
            bleed_timer: 0,
            screen_shake: 0,
            match_state: MatchState::default(),
            frame: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.match_state.phase()
    }

    pub fn is_serving(&self) -> bool {
        self.match_state.serving
    }

    pub fn is_game_over(&self) -> bool {
        self.match_state.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.match_state.paused
    }

    pub fn winner(&self) -> Option<Side> {
        self.match_state.winner
    }

    /// (player, opponent)
    pub fn scores(&self) -> (u32, u32) {
        (self.match_state.player_score, self.match_state.opponent_score)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pause(&mut self) {
        if self.match_state.paused {
            return;
        }
        self.match_state.paused = true;
        log::info!("Paused");
        self.emit(GameEvent::Paused);
    }

    pub fn resume(&mut self) {
        if !self.match_state.paused {
            return;
        }
        self.match_state.paused = false;
        log::info!("Resumed");
        self.emit(GameEvent::Resumed);
    }

    pub fn toggle_pause(&mut self) {
        if self.match_state.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Put the ball back at centre and wait for a serve. Clears the combo.
    pub fn reset_serve(&mut self) {
        self.ball.reset(&self.tuning);
        let ms = &mut self.match_state;
        ms.serving = true;
        ms.combo = 0;
        ms.combo_timer = 0;
    }

    /// Start a fresh match: scores, paddles and ball reset, then unpause.
    /// Stains stay on the court.
    pub fn restart(&mut self) {
        self.match_state.player_score = 0;
        self.match_state.opponent_score = 0;
        self.match_state.game_over = false;
        self.match_state.winner = None;
        self.match_state.last_hit_ms = None;
        self.player = Paddle::player(&self.tuning);
        self.opponent = Paddle::opponent(&self.tuning);
        self.reset_serve();
        log::info!("Match restarted");
        self.emit(GameEvent::Restarted);
        self.resume();
    }
}
