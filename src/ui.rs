//! UI control boundary
//!
//! The overlay (pause menu, score text) lives outside the simulation. It is
//! told about state transitions and calls back into `GameState::pause`,
//! `resume` and `restart`.

use crate::sim::{GameEvent, Side};

/// Transitions the UI cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Paused,
    Resumed,
    GameOver { winner: Side },
    Restarted,
    /// Score text changed; `flash` names the side to highlight
    Score {
        player: u32,
        opponent: u32,
        flash: Side,
    },
}

/// Map a simulation event to a UI notification
pub fn ui_event_for(event: &GameEvent) -> Option<UiEvent> {
    match *event {
        GameEvent::Paused => Some(UiEvent::Paused),
        GameEvent::Resumed => Some(UiEvent::Resumed),
        GameEvent::GameOver { winner } => Some(UiEvent::GameOver { winner }),
        GameEvent::Restarted => Some(UiEvent::Restarted),
        GameEvent::Scored {
            scorer,
            player_score,
            opponent_score,
            ..
        } => Some(UiEvent::Score {
            player: player_score,
            opponent: opponent_score,
            flash: scorer,
        }),
        _ => None,
    }
}

pub trait UiSink {
    fn notify(&mut self, event: UiEvent);
}

/// Minimal overlay model: menu visibility, score text and end-of-match banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub menu_visible: bool,
    pub player_score: String,
    pub opponent_score: String,
    pub flashing: Option<Side>,
    pub banner: Option<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            player_score: "0".to_string(),
            opponent_score: "0".to_string(),
            ..Default::default()
        }
    }

    /// Label of the pause button for the current state
    pub fn pause_button_label(&self) -> &'static str {
        if self.menu_visible { "▶" } else { "| |" }
    }
}

impl UiSink for Hud {
    fn notify(&mut self, event: UiEvent) {
        match event {
            UiEvent::Paused => self.menu_visible = true,
            UiEvent::Resumed => self.menu_visible = false,
            UiEvent::GameOver { winner } => {
                self.banner = Some(match winner {
                    Side::Player => "You win!".to_string(),
                    Side::Opponent => "You lose!".to_string(),
                });
            }
            UiEvent::Restarted => {
                self.player_score = "0".to_string();
                self.opponent_score = "0".to_string();
                self.flashing = None;
                self.banner = None;
            }
            UiEvent::Score {
                player,
                opponent,
                flash,
            } => {
                self.player_score = player.to_string();
                self.opponent_score = opponent.to_string();
                self.flashing = Some(flash);
            }
        }
    }
}
