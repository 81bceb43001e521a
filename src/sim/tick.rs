//! Per-frame simulation tick
//!
//! Core game loop that advances the match by exactly one rendered frame.

use glam::Vec2;

use super::state::GameState;
use super::{effects, opponent, physics, scoring};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in court coordinates (paddle centres on it)
    pub pointer: Option<Vec2>,
    /// Launch the ball (click/space), only honoured while serving
    pub serve: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start a new match
    pub restart: bool,
    /// Host wall-clock time in milliseconds (combo cooldown gate)
    pub now_ms: f64,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
    }
    if input.pause {
        state.toggle_pause();
    }

    // Paused freezes everything, cosmetics included
    if state.is_paused() {
        return;
    }

    state.frame += 1;

    if state.is_game_over() {
        effects::tick_effects(state);
        if effects::animate_game_over(state) {
            state.pause();
        }
        return;
    }

    if let Some(pointer) = input.pointer {
        let tuning = &state.tuning;
        state.player.follow_pointer(pointer, tuning);
    }
    state.player.sample_vertical_speed();

    scoring::tick_combo(state);
    effects::tick_effects(state);

    if state.is_serving() {
        physics::update_serve_aim(state);
        if !(input.serve && physics::serve(state)) {
            return;
        }
    }

    if let Some((scorer, exit_pos)) = physics::step_ball(state, input.now_ms) {
        scoring::award_point(state, scorer, exit_pos);
    }

    opponent::steer(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, GamePhase, Side};
    use crate::tuning::Tuning;

    #[test]
    fn test_tick_serve_to_rallying() {
        let mut state = GameState::new(12345, Tuning::default());
        assert_eq!(state.phase(), GamePhase::Serving);

        // Tick without serve - ball stays parked
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), GamePhase::Serving);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));

        let input = TickInput {
            serve: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase(), GamePhase::Rallying);
        // Moved on the serve frame, straight at the opponent
        assert!(state.ball.pos.x > 400.0);
    }

    #[test]
    fn test_aim_follows_pointer_while_serving() {
        let mut state = GameState::new(1, Tuning::default());
        let input = TickInput {
            pointer: Some(Vec2::new(100.0, 500.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        // Paddle centre below-left of the ball: aim up and to the right
        assert!(state.match_state.serve_angle < 0.0);
        assert_eq!(state.player.center(), Vec2::new(100.0, 500.0));
    }

    #[test]
    fn test_tick_pause() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(
            &mut state,
            &TickInput {
                serve: true,
                ..Default::default()
            },
        );
        let frozen = state.ball;

        let toggle = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &toggle);
        assert!(state.is_paused());
        assert_eq!(state.ball, frozen);

        // Nothing moves while paused
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ball, frozen);

        tick(&mut state, &toggle);
        assert!(!state.is_paused());
        assert_ne!(state.ball.pos, frozen.pos);
    }

    #[test]
    fn test_pause_freezes_cosmetics() {
        let mut state = GameState::new(8, Tuning::default());
        effects::hit_burst(&mut state, Vec2::new(200.0, 200.0));
        state.bleed_timer = 30;
        state.player.flash = 15;
        state.screen_shake = 4;
        state.match_state.combo = 2;
        state.match_state.combo_timer = 7;
        // A few live frames so a blood drop exists
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.blood_drops.is_empty());

        state.pause();
        let particles = state.particles.clone();
        let drops = state.blood_drops.clone();
        let (bleed, flash, shake) = (state.bleed_timer, state.player.flash, state.screen_shake);
        let ms = state.match_state.clone();
        let frame = state.frame;

        for _ in 0..50 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.particles, particles);
        assert_eq!(state.blood_drops, drops);
        assert_eq!(state.bleed_timer, bleed);
        assert_eq!(state.player.flash, flash);
        assert_eq!(state.screen_shake, shake);
        assert_eq!(state.match_state.combo_timer, ms.combo_timer);
        assert_eq!(state.match_state.combo, ms.combo);
        assert_eq!(state.frame, frame);
    }

    #[test]
    fn test_serve_ignored_while_paused() {
        let mut state = GameState::new(1, Tuning::default());
        state.pause();
        tick(
            &mut state,
            &TickInput {
                serve: true,
                ..Default::default()
            },
        );
        assert!(state.is_serving());
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let mut state = GameState::new(5, Tuning::default());
        state.match_state.serving = false;
        state.ball.pos = Vec2::new(0.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        // Player paddle out of the ball's way
        let input = TickInput {
            pointer: Some(Vec2::new(5.0, 50.0)),
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.scores(), (0, 1));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(state.is_serving());
        let events = state.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Scored {
                scorer: Side::Opponent,
                ..
            }
        )));
    }

    #[test]
    fn test_game_over_animation_then_pause() {
        let mut state = GameState::new(5, Tuning::default());
        state.match_state.player_score = 4;
        state.match_state.serving = false;
        state.opponent.pos.y = 0.0;
        state.ball.pos = Vec2::new(795.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 0.0);
        tick(&mut state, &TickInput::default());

        assert!(state.is_game_over());
        assert!(state.is_paused());
        assert!(state.opponent.broken);

        // Host resumes to watch the animation; it pauses again once the
        // broken paddle has fallen off court
        state.resume();
        let mut frames = 0;
        while !state.is_paused() {
            tick(&mut state, &TickInput::default());
            frames += 1;
            assert!(frames < 500);
        }
        assert!(state.opponent.pos.y > 600.0);
        assert!(state.player.angle > 0.0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = GameState::new(5, Tuning::default());
        state.match_state.opponent_score = 4;
        state.match_state.serving = false;
        state.player.pos.y = 0.0;
        state.ball.pos = Vec2::new(5.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.scores(), (0, 0));
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert!(!state.is_paused());
        assert!(state.is_serving());
        assert!(!state.player.broken);
        assert_eq!(state.player.angle, 0.0);
        assert_eq!(state.player.pos, Vec2::new(0.0, 250.0));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        let inputs = [
            TickInput {
                pointer: Some(Vec2::new(5.0, 200.0)),
                ..Default::default()
            },
            TickInput {
                serve: true,
                ..Default::default()
            },
            TickInput {
                pointer: Some(Vec2::new(5.0, 260.0)),
                now_ms: 16.0,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.particles, state2.particles);
        assert_eq!(state1.opponent.pos, state2.opponent.pos);
    }
}
