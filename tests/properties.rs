use crimson_pong::Tuning;
use crimson_pong::sim::physics::resolve_paddle_hit;
use crimson_pong::sim::{GameEvent, GameState, Side, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn pointer() -> impl Strategy<Value = Vec2> {
    (-200.0f32..1000.0, -200.0f32..800.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn player_paddle_stays_on_court(seed in any::<u64>(), p in pointer()) {
        let mut state = GameState::new(seed, Tuning::default());
        tick(&mut state, &TickInput { pointer: Some(p), ..Default::default() });
        let pos = state.player.pos;
        prop_assert!((0.0..=500.0).contains(&pos.y));
        prop_assert!((0.0..=790.0).contains(&pos.x));
    }

    #[test]
    fn paddle_hit_caps_vertical_speed(
        offset in -50.0f32..=50.0,
        vel in (-20.0f32..20.0, -20.0f32..20.0),
        paddle_speed in -300.0f32..300.0,
    ) {
        let mut state = GameState::new(0, Tuning::default());
        state.match_state.serving = false;
        state.player.vertical_speed = paddle_speed;
        state.ball.pos = Vec2::new(10.0, 300.0 + offset);
        state.ball.vel = Vec2::new(vel.0, vel.1);

        resolve_paddle_hit(&mut state, Side::Player, 0.0);
        prop_assert!(state.ball.vel.y.abs() <= 10.0);
    }

    #[test]
    fn paddle_hit_speeds_up_only_toward_goal(dx in 0.5f32..20.0, opponent in any::<bool>()) {
        let (side, x, toward) = if opponent {
            (Side::Opponent, 745.0, dx)
        } else {
            (Side::Player, 5.0, -dx)
        };
        for vx in [toward, -toward] {
            let mut state = GameState::new(0, Tuning::default());
            state.match_state.serving = false;
            state.ball.pos = Vec2::new(x, 300.0);
            state.ball.vel = Vec2::new(vx, 0.0);
            resolve_paddle_hit(&mut state, side, 0.0);

            if vx == toward {
                prop_assert!((state.ball.vel.x + vx * 1.05).abs() < 1e-3);
            } else {
                prop_assert_eq!(state.ball.vel.x, vx);
            }
        }
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        pointers in prop::collection::vec(pointer(), 1..40),
    ) {
        let mut state = GameState::new(seed, Tuning::default());
        let half = state.tuning.midpoint_x();

        for frame in 0..600u64 {
            let input = TickInput {
                pointer: Some(pointers[frame as usize % pointers.len()]),
                serve: frame % 20 == 0,
                now_ms: frame as f64 * 16.7,
                ..Default::default()
            };
            tick(&mut state, &input);

            let events = state.drain_events();
            let scored = events
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored { .. }))
                .count();
            prop_assert!(scored <= 1);
            if events.iter().any(|e| matches!(e, GameEvent::PaddleHit { .. })) {
                prop_assert!(state.ball.vel.y.abs() <= 10.0);
            }

            let (player, opponent) = state.scores();
            prop_assert!(player <= 5 && opponent <= 5);
            if state.is_game_over() {
                break;
            }
            let opp = state.opponent.pos;
            prop_assert!((0.0..=500.0).contains(&opp.y));
            prop_assert!(opp.x >= half && opp.x <= 790.0);
        }
    }
}
