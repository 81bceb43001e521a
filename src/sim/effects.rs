//! Cosmetic feedback: sparks, stains, blood drops, flashes and the
//! post-match paddle animation
//!
//! Nothing here feeds back into gameplay. Randomness comes from the state's
//! seeded RNG so replays look identical.

use glam::Vec2;
use rand::Rng;

use super::state::{BloodDrop, GameState, Particle, Side, Stain, Tint};

/// Random sparks around `pos`
fn burst(state: &mut GameState, pos: Vec2, count: usize, tint: Option<Tint>) {
    let life = state.tuning.particle_life;
    state.particles.reserve(count);
    for _ in 0..count {
        let radius = state.rng.random::<f32>() * 3.0 + 1.0;
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * 4.0,
            (state.rng.random::<f32>() - 0.5) * 4.0,
        );
        state.particles.push(Particle {
            pos,
            vel,
            radius,
            life,
            tint,
        });
    }
}

/// Small untinted burst for wall and paddle impacts
pub fn hit_burst(state: &mut GameState, pos: Vec2) {
    let count = state.tuning.hit_burst;
    burst(state, pos, count, None);
}

/// Larger tinted burst plus a permanent stain where the ball left the court
pub fn score_burst(state: &mut GameState, pos: Vec2, tint: Tint) {
    let count = state.tuning.score_burst;
    burst(state, pos, count, Some(tint));
    let radius = state.rng.random::<f32>() * 20.0 + 10.0;
    state.stains.push(Stain { pos, radius, tint });
}

/// Start the opponent paddle bleeding
pub fn start_bleeding(state: &mut GameState) {
    state.bleed_timer = state.tuning.bleed_frames;
}

/// Age every transient effect by one frame
pub fn tick_effects(state: &mut GameState) {
    if state.bleed_timer > 0 {
        state.bleed_timer -= 1;
        if state.bleed_timer % state.tuning.blood_drop_interval == 0 {
            let paddle = state.opponent;
            let x = paddle.pos.x + state.rng.random::<f32>() * paddle.size.x;
            let speed = state.rng.random::<f32>() * 2.0 + 1.0;
            state.blood_drops.push(BloodDrop {
                pos: Vec2::new(x, paddle.pos.y),
                speed,
            });
        }
    }

    let floor = state.tuning.court_height;
    for drop in state.blood_drops.iter_mut() {
        drop.pos.y += drop.speed;
    }
    state.blood_drops.retain(|d| d.pos.y <= floor);

    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    state.particles.retain(|p| p.life > 0);

    state.player.tick_flash();
    state.opponent.tick_flash();
    state.screen_shake = state.screen_shake.saturating_sub(1);
}

/// One frame of the post-match animation: the winner spins, a broken loser
/// falls with gravity. Returns true once a paddle has dropped below the court.
pub fn animate_game_over(state: &mut GameState) -> bool {
    let Some(winner) = state.match_state.winner else {
        return false;
    };
    let spin = state.tuning.winner_spin_degrees;
    let gravity = state.tuning.broken_fall_gravity;

    let champ = state.paddle_mut(winner);
    champ.angle = crate::wrap_degrees(champ.angle + spin);

    let loser = state.paddle_mut(winner.other());
    if loser.broken {
        loser.fall_speed += gravity;
        loser.pos.y += loser.fall_speed;
    }

    let floor = state.tuning.court_height;
    [Side::Player, Side::Opponent]
        .iter()
        .any(|&side| state.paddle(side).pos.y > floor)
}
