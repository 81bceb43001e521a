//! Host-side frame driver
//!
//! Called once per animation frame by the host scheduler: sample input, tick
//! the simulation, fan events out to audio/UI, then hand a snapshot to the
//! renderer. Rendering happens even while paused.

use crate::audio::{AudioMixer, AudioSink};
use crate::input::{InputAdapter, InputEvent};
use crate::sim::{GameEvent, GameState, RenderSink, tick};
use crate::ui::{UiSink, ui_event_for};

pub struct FrameDriver<A, U> {
    pub state: GameState,
    pub input: InputAdapter,
    pub audio: AudioMixer<A>,
    pub ui: U,
}

impl<A: AudioSink, U: UiSink> FrameDriver<A, U> {
    /// Wire up the sinks and start the background music
    pub fn new(state: GameState, input: InputAdapter, audio: A, ui: U) -> Self {
        let mut audio = AudioMixer::new(audio);
        audio.start_music();
        Self {
            state,
            input,
            audio,
            ui,
        }
    }

    /// Forward a raw input event (may arrive between frames). The overlay
    /// pause/resume buttons act at once through [`Self::pause`] and
    /// [`Self::resume`], so a stray resume never pauses a running match.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PauseButton => self.pause(),
            InputEvent::ResumeButton => self.resume(),
            _ => self.input.handle(event),
        }
    }

    /// Run one frame and render it
    pub fn frame<R: RenderSink>(&mut self, now_ms: f64, renderer: &mut R) {
        let input = self.input.take_tick_input(now_ms);
        tick(&mut self.state, &input);
        self.dispatch();
        renderer.render(&self.state.snapshot());
    }

    /// Overlay "pause" button
    pub fn pause(&mut self) {
        self.state.pause();
        self.dispatch();
    }

    /// Overlay "resume" button
    pub fn resume(&mut self) {
        self.state.resume();
        self.dispatch();
    }

    /// Overlay "restart" button
    pub fn restart(&mut self) {
        self.state.restart();
        self.dispatch();
    }

    /// Deliver pending events; returns them for callers that want to log
    pub fn dispatch(&mut self) -> Vec<GameEvent> {
        let events = self.state.drain_events();
        for event in &events {
            self.audio.on_event(event);
            if let Some(ui) = ui_event_for(event) {
                self.ui.notify(ui);
            }
        }
        events
    }
}
