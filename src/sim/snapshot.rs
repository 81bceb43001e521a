//! Read-only view of a frame for the renderer

use serde::Serialize;

use super::state::{
    Ball, BloodDrop, GamePhase, GameState, Obstacle, Paddle, Particle, Side, Stain,
};

/// Everything a renderer needs for one frame. Borrowed from the state, so it
/// is cheap to build every frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub paused: bool,
    pub winner: Option<Side>,
    pub player_score: u32,
    pub opponent_score: u32,
    pub ball: &'a Ball,
    pub player: &'a Paddle,
    pub opponent: &'a Paddle,
    pub obstacles: &'a [Obstacle],
    pub particles: &'a [Particle],
    pub stains: &'a [Stain],
    pub blood_drops: &'a [BloodDrop],
    pub combo: u32,
    /// Combo text opacity, fading with the display timer
    pub combo_alpha: f32,
    /// Remaining shake frames (0 = steady)
    pub screen_shake: u32,
    /// Serve aim line angle, only while waiting for a serve
    pub serve_aim: Option<f32>,
}

/// Receives a snapshot every frame; never talks back to the simulation
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let ms = &self.match_state;
        let display = self.tuning.combo_display_frames.max(1) as f32;
        Snapshot {
            phase: ms.phase(),
            paused: ms.paused,
            winner: ms.winner,
            player_score: ms.player_score,
            opponent_score: ms.opponent_score,
            ball: &self.ball,
            player: &self.player,
            opponent: &self.opponent,
            obstacles: &self.obstacles,
            particles: &self.particles,
            stains: &self.stains,
            blood_drops: &self.blood_drops,
            combo: ms.combo,
            combo_alpha: ms.combo_timer as f32 / display,
            screen_shake: self.screen_shake,
            serve_aim: (ms.phase() == GamePhase::Serving).then_some(ms.serve_angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::state::{GamePhase, GameState};
    use crate::tuning::Tuning;

    #[test]
    fn test_serve_aim_only_while_serving() {
        let mut state = GameState::new(1, Tuning::default());
        state.match_state.serve_angle = 0.25;
        assert_eq!(state.snapshot().serve_aim, Some(0.25));

        state.match_state.serving = false;
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Rallying);
        assert_eq!(snap.serve_aim, None);
    }

    #[test]
    fn test_combo_alpha_fades() {
        let mut state = GameState::new(1, Tuning::default());
        state.match_state.combo = 2;
        state.match_state.combo_timer = 60;
        assert!((state.snapshot().combo_alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(1, Tuning::default());
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Serving\""));
        assert!(json.contains("\"player_score\":0"));
    }
}
