//! Points, match completion and the combo counter
//!
//! The combo uses two clocks: the hit gate compares wall-clock
//! milliseconds, the display decays in frames.

use glam::Vec2;

use super::effects;
use super::state::{GameEvent, GameState, Side, Tint};

/// Credit a point to `scorer`, spray cosmetics at `exit_pos`, park the ball
/// for the next serve and finish the match if the winning score was reached.
pub fn award_point(state: &mut GameState, scorer: Side, exit_pos: Vec2) {
    let ms = &mut state.match_state;
    match scorer {
        Side::Player => ms.player_score += 1,
        Side::Opponent => ms.opponent_score += 1,
    }
    let (player_score, opponent_score) = (ms.player_score, ms.opponent_score);
    log::info!(
        "{} scored ({} - {})",
        scorer.as_str(),
        player_score,
        opponent_score
    );
    state.emit(GameEvent::Scored {
        scorer,
        pos: exit_pos,
        player_score,
        opponent_score,
    });

    effects::score_burst(state, exit_pos, Tint::for_scorer(scorer));
    if scorer == Side::Player {
        effects::start_bleeding(state);
    }

    state.reset_serve();
    check_match_over(state);
}

/// End the match once either side reaches the winning score. Returns true if
/// the match ended on this call.
pub fn check_match_over(state: &mut GameState) -> bool {
    let ms = &state.match_state;
    if ms.game_over {
        return false;
    }
    let target = state.tuning.winning_score;
    let winner = if ms.player_score >= target {
        Side::Player
    } else if ms.opponent_score >= target {
        Side::Opponent
    } else {
        return false;
    };

    state.match_state.game_over = true;
    state.match_state.winner = Some(winner);
    state.paddle_mut(winner.other()).broken = true;
    log::info!("Game over, {} wins", winner.as_str());
    state.emit(GameEvent::GameOver { winner });
    state.pause();
    true
}

/// Count a paddle hit toward the combo. Only a hit landing within the
/// cooldown window of the previous hit increments; others leave the count
/// alone until the display timer runs out.
pub fn register_combo_hit(state: &mut GameState, now_ms: f64) {
    let cooldown = state.tuning.combo_cooldown_ms;
    let display = state.tuning.combo_display_frames;
    let ms = &mut state.match_state;

    let within = ms
        .last_hit_ms
        .is_some_and(|last| now_ms - last <= cooldown);
    ms.last_hit_ms = Some(now_ms);
    if !within {
        return;
    }

    ms.combo += 1;
    ms.combo_timer = display;
    let count = ms.combo;
    log::debug!("Combo x{count}");
    state.emit(GameEvent::Combo { count });
}

/// Frame-based combo display decay
pub fn tick_combo(state: &mut GameState) {
    let ms = &mut state.match_state;
    if ms.combo_timer > 0 {
        ms.combo_timer -= 1;
    } else {
        ms.combo = 0;
    }
}
