//! Computer paddle controller
//!
//! Predicts where the ball will cross the paddle's x and walks toward it at a
//! fixed speed. Horizontally it steps toward the net when the ball is about to
//! be on its half, and backs off toward the edge otherwise.

use super::state::{Ball, GameState};

/// Projected ball y at `paddle_x`, only while the ball travels toward the
/// opponent (so dx is never zero here)
pub fn intercept_y(ball: &Ball, paddle_x: f32) -> Option<f32> {
    if ball.vel.x > 0.0 {
        Some(ball.pos.y + (ball.vel.y / ball.vel.x) * (paddle_x - ball.pos.x))
    } else {
        None
    }
}

/// Move the opponent paddle one frame toward its targets
pub fn steer(state: &mut GameState) {
    let t = &state.tuning;
    let ball = &state.ball;
    let paddle = &mut state.opponent;

    // Vertical: chase the intercept, hold when the ball moves away
    let center_y = paddle.center().y;
    let target_y = intercept_y(ball, paddle.pos.x).unwrap_or(center_y);
    if center_y < target_y - t.opponent_dead_zone {
        paddle.pos.y += t.opponent_vertical_speed;
    } else if center_y > target_y + t.opponent_dead_zone {
        paddle.pos.y -= t.opponent_vertical_speed;
    }

    // Horizontal: look ahead a fixed number of frames
    let future_x = ball.pos.x + ball.vel.x * t.opponent_lookahead_frames;
    let midpoint = t.midpoint_x();
    if future_x > midpoint {
        if paddle.pos.x > t.court_width - t.opponent_advance_distance {
            paddle.pos.x -= t.opponent_horizontal_speed;
        }
    } else if paddle.pos.x < t.max_paddle_x() - t.opponent_retreat_inset {
        paddle.pos.x += t.opponent_horizontal_speed;
    }

    paddle.pos.y = paddle.pos.y.clamp(0.0, t.max_paddle_y());
    paddle.pos.x = paddle.pos.x.clamp(midpoint, t.max_paddle_x());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state() -> GameState {
        let mut state = GameState::new(9, Tuning::default());
        state.match_state.serving = false;
        state
    }

    #[test]
    fn test_intercept_projection() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(&tuning);
        ball.pos = Vec2::new(400.0, 300.0);
        ball.vel = Vec2::new(4.0, 2.0);
        assert_eq!(intercept_y(&ball, 740.0), Some(470.0));
    }

    #[test]
    fn test_no_intercept_when_ball_moves_away_or_still() {
        let tuning = Tuning::default();
        let mut ball = Ball::new(&tuning);
        ball.vel = Vec2::new(-4.0, 2.0);
        assert_eq!(intercept_y(&ball, 740.0), None);
        ball.vel = Vec2::new(0.0, 3.0);
        assert_eq!(intercept_y(&ball, 740.0), None);
    }

    #[test]
    fn test_moves_down_toward_intercept_at_fixed_speed() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(4.0, 2.0);
        steer(&mut state);
        assert_eq!(state.opponent.pos.y, 255.0);
    }

    #[test]
    fn test_dead_zone_holds_position() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 305.0);
        state.ball.vel = Vec2::new(4.0, 0.0);
        steer(&mut state);
        assert_eq!(state.opponent.pos.y, 250.0);
    }

    #[test]
    fn test_holds_vertically_when_ball_moves_away() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 50.0);
        state.ball.vel = Vec2::new(-4.0, -2.0);
        steer(&mut state);
        assert_eq!(state.opponent.pos.y, 250.0);
    }

    #[test]
    fn test_advances_when_ball_heads_into_its_half() {
        let mut state = state();
        state.ball.pos = Vec2::new(500.0, 300.0);
        state.ball.vel = Vec2::new(4.0, 0.0);
        steer(&mut state);
        // 740 > 800 - 200, so one step toward the net
        assert_eq!(state.opponent.pos.x, 737.0);
    }

    #[test]
    fn test_stops_advancing_at_max_distance() {
        let mut state = state();
        state.opponent.pos.x = 600.0;
        state.ball.pos = Vec2::new(500.0, 300.0);
        state.ball.vel = Vec2::new(4.0, 0.0);
        steer(&mut state);
        assert_eq!(state.opponent.pos.x, 600.0);
    }

    #[test]
    fn test_retreats_when_ball_is_far() {
        let mut state = state();
        state.opponent.pos.x = 700.0;
        state.ball.pos = Vec2::new(200.0, 300.0);
        state.ball.vel = Vec2::new(-4.0, 0.0);
        steer(&mut state);
        assert_eq!(state.opponent.pos.x, 703.0);

        // Never past the retreat inset
        state.opponent.pos.x = 770.0;
        steer(&mut state);
        assert_eq!(state.opponent.pos.x, 770.0);
    }

    #[test]
    fn test_clamped_to_right_half_and_court() {
        let mut state = state();
        state.opponent.pos = Vec2::new(350.0, 520.0);
        state.ball.pos = Vec2::new(200.0, 300.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);
        steer(&mut state);
        assert_eq!(state.opponent.pos.x, 400.0);
        assert_eq!(state.opponent.pos.y, 500.0);
    }
}
