//! Ball motion and collision response
//!
//! One call to [`step_ball`] advances the ball by a single frame: move, drift,
//! decay, then walls, paddles, obstacles and finally the goal lines.

use glam::Vec2;

use super::collision::{circles_overlap, deflect_from, hit_offset, paddle_band_hit};
use super::effects;
use super::scoring;
use super::state::{GameEvent, GameState, Side};
use crate::{angle_between, direction};

/// Re-aim the serve from the player paddle centre toward the parked ball
pub fn update_serve_aim(state: &mut GameState) {
    state.match_state.serve_angle = angle_between(state.player.center(), state.ball.pos);
}

/// Launch the ball along the current serve angle. Returns false (and does
/// nothing) unless the match is waiting for a serve.
pub fn serve(state: &mut GameState) -> bool {
    let ms = &state.match_state;
    if !ms.serving || ms.game_over || ms.paused {
        return false;
    }
    let angle = ms.serve_angle;
    state.ball.vel = direction(angle) * state.tuning.serve_speed;
    state.match_state.serving = false;
    log::debug!("Served at {:.1} degrees", angle.to_degrees());
    state.emit(GameEvent::Served { angle });
    true
}

/// Advance the ball one frame. Returns the scoring side and the exit
/// position if the ball left the court.
pub fn step_ball(state: &mut GameState, now_ms: f64) -> Option<(Side, Vec2)> {
    let t = &state.tuning;
    let ball = &mut state.ball;

    ball.pos += ball.vel;
    ball.pos.x += ball.spin;
    ball.vel *= t.ball_friction;

    // Top/bottom walls: flip only, no positional correction
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > t.court_height {
        ball.vel.y = -ball.vel.y;
        let pos = ball.pos;
        effects::hit_burst(state, pos);
        state.emit(GameEvent::WallBounce { pos });
    }

    for side in [Side::Player, Side::Opponent] {
        let rect = state.paddle(side).rect();
        if paddle_band_hit(state.ball.pos, state.ball.radius, &rect) {
            resolve_paddle_hit(state, side, now_ms);
        }
    }

    for i in 0..state.obstacles.len() {
        let obstacle = state.obstacles[i];
        let ball = &mut state.ball;
        if circles_overlap(ball.pos, ball.radius, obstacle.pos, obstacle.radius) {
            ball.vel = deflect_from(obstacle.pos, ball.pos, ball.vel);
            let pos = ball.pos;
            state.emit(GameEvent::ObstacleBounce { pos });
        }
    }

    let ball = &state.ball;
    if ball.pos.x - ball.radius < 0.0 {
        Some((Side::Opponent, ball.pos))
    } else if ball.pos.x + ball.radius > state.tuning.court_width {
        Some((Side::Player, ball.pos))
    } else {
        None
    }
}

/// True when the ball is travelling toward the goal `side` defends
#[inline]
pub fn heading_to_goal(vel: Vec2, side: Side) -> bool {
    match side {
        Side::Player => vel.x < 0.0,
        Side::Opponent => vel.x > 0.0,
    }
}

/// Apply a paddle hit: reflect and speed up if the ball was heading for this
/// paddle's goal, set vertical speed from the contact offset plus paddle
/// english, then fire feedback and combo bookkeeping.
pub fn resolve_paddle_hit(state: &mut GameState, side: Side, now_ms: f64) {
    let t = &state.tuning;
    let paddle = *state.paddle(side);
    // The opponent imparts no english
    let paddle_speed = match side {
        Side::Player => paddle.vertical_speed,
        Side::Opponent => 0.0,
    };

    let ball = &mut state.ball;
    if heading_to_goal(ball.vel, side) {
        ball.vel.x *= -t.hit_speed_growth;
    }

    let hit_pos = hit_offset(ball.pos.y, &paddle.rect());
    let dy = hit_pos * t.hit_vertical_sensitivity + paddle_speed * t.paddle_english;
    ball.vel.y = dy.clamp(-t.max_vertical_speed, t.max_vertical_speed);
    ball.spin = paddle_speed * t.paddle_spin;

    let pos = ball.pos;
    let flash = t.flash_frames;
    let shake = t.shake_frames;

    effects::hit_burst(state, pos);
    state.paddle_mut(side).flash = flash;
    state.screen_shake = shake;
    state.emit(GameEvent::PaddleHit { side, pos });

    scoring::register_combo_hit(state, now_ms);
}
