//! Input events and their effect on game state
//!
//! Events are queued by the host between frames and applied at the start of
//! the next frame, before any physics runs.

use super::state::GameState;
use crate::consts::KEY_ESCAPE;

/// Host input, keyed by DOM `KeyboardEvent.code` style identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Window / surface lost focus
    Blur,
}

impl GameState {
    pub fn apply_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.on_key_down(key),
            InputEvent::KeyUp(key) => self.on_key_up(key),
            InputEvent::Blur => self.on_blur(),
        }
    }

    /// Escape toggles pause. Any key pressed while not paused (escape
    /// included) is recorded as held and starts the round, so escape from
    /// Idle leaves the game both paused and running.
    pub fn on_key_down(&mut self, key: &str) {
        let was_paused = self.paused;
        if key == KEY_ESCAPE {
            self.paused = !self.paused;
        }
        if !was_paused {
            self.keys.press(key);
            self.running = true;
        }
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.keys.release(key);
    }

    /// Losing focus always pauses; it never unpauses
    pub fn on_blur(&mut self) {
        if !self.paused {
            log::info!("Auto-paused (window blur)");
        }
        self.paused = true;
    }
}
