//! Input adapter
//!
//! Raw pointer/keyboard events can arrive at any time between frames. The
//! adapter keeps the latest pointer position and latches one-shot commands
//! until the next tick consumes them.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    R,
    Other,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` string
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            " " | "Space" | "Spacebar" => Key::Space,
            "r" | "R" => Key::R,
            _ => Key::Other,
        }
    }
}

/// Raw host events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved, in client (window) coordinates
    PointerMoved { x: f32, y: f32 },
    /// Primary click / tap
    Click,
    KeyDown(Key),
    /// Overlay buttons
    PauseButton,
    ResumeButton,
    RestartButton,
}

/// Turns raw events into per-tick input
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Client position of the court's top-left corner
    origin: Vec2,
    pointer: Option<Vec2>,
    serve: bool,
    pause: bool,
    restart: bool,
}

impl InputAdapter {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            ..Default::default()
        }
    }

    /// Court moved on screen (resize/scroll)
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Latest pointer position in court coordinates
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = Some(Vec2::new(x, y) - self.origin);
            }
            InputEvent::Click | InputEvent::KeyDown(Key::Space) => self.serve = true,
            InputEvent::KeyDown(Key::Escape) => self.pause = !self.pause,
            // Overlay buttons go straight to FrameDriver::pause/resume
            InputEvent::PauseButton | InputEvent::ResumeButton => {}
            InputEvent::KeyDown(Key::R) | InputEvent::RestartButton => self.restart = true,
            InputEvent::KeyDown(Key::Other) => {}
        }
    }

    /// Build the input for the next tick and clear one-shot commands
    pub fn take_tick_input(&mut self, now_ms: f64) -> TickInput {
        TickInput {
            pointer: self.pointer,
            serve: std::mem::take(&mut self.serve),
            pause: std::mem::take(&mut self.pause),
            restart: std::mem::take(&mut self.restart),
            now_ms,
        }
    }
}
