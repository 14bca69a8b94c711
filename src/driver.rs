//! Frame driver
//!
//! Owns the game state together with everything it talks to: the drawing
//! surface, the text sinks and the RNG. The host calls [`FrameDriver::frame`]
//! once per display refresh and forwards input with
//! [`FrameDriver::push_event`] in between.

use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::hud::{Hud, TextSink};
use crate::renderer::{Surface, draw_entities};
use crate::sim::{GameState, InputEvent, Phase, run_frame};

pub struct FrameDriver<S, T, R> {
    pub state: GameState,
    pub surface: S,
    pub hud: Hud<T>,
    rng: R,
    /// Input received since the last frame
    pending: Vec<InputEvent>,
}

impl<S: Surface, T: TextSink, R: Rng> FrameDriver<S, T, R> {
    /// Start a game on `surface`. If the surface could not be created the
    /// failure is shown on the status sink and no driver is returned, so no
    /// frame ever runs.
    pub fn init(
        config: GameConfig,
        surface: Result<S, GameError>,
        mut hud: Hud<T>,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let surface = match surface {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to load game: {}", e);
                hud.show_load_failure();
                return Err(e);
            }
        };

        let state = GameState::new(config, &mut rng);
        log::info!(
            "Game initialized ({}x{} on {}, first to {})",
            state.width(),
            state.height(),
            state.config.background.as_str(),
            state.score.max_score
        );

        Ok(Self {
            state,
            surface,
            hud,
            rng,
            pending: Vec::new(),
        })
    }

    /// Queue host input for the next frame
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Run one frame: clear, simulate, update the prompt, draw, update the
    /// score. Returns the phase the frame ran in.
    pub fn frame(&mut self) -> Phase {
        let (width, height) = (self.state.width(), self.state.height());
        self.surface.clear_rect(0.0, 0.0, width, height);

        let input = std::mem::take(&mut self.pending);
        let phase = run_frame(&mut self.state, &input, &mut self.rng);
        for event in &self.state.events {
            log::trace!("Frame event: {:?}", event);
        }

        self.hud.show_phase(phase);
        draw_entities(&mut self.surface, &self.state);
        self.hud.show_score(&self.state.score);
        if self.state.config.debug {
            self.hud.show_debug(&self.state);
        }

        phase
    }
}
