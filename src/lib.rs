//! Canvas Pong - A two-paddle Pong game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, scoring, input state)
//! - `renderer`: Drawing surface abstraction and WebGPU pipeline
//! - `hud`: Status, score and debug text readouts
//! - `driver`: Per-frame orchestration of simulation, rendering and HUD
//! - `config`: Initialization-time game configuration

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod hud;
pub mod renderer;
pub mod sim;

pub use color::Color;
pub use config::{BallConfig, GameConfig, PaddleConfig, ScoreConfig};
pub use driver::FrameDriver;
pub use error::GameError;

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions
    pub const DEFAULT_CANVAS_WIDTH: f32 = 1024.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 640.0;

    /// Paddle defaults
    pub const DEFAULT_PADDLE_PADDING: f32 = 50.0;
    pub const DEFAULT_PADDLE_WIDTH: f32 = DEFAULT_CANVAS_HEIGHT / 40.0;
    pub const DEFAULT_PADDLE_HEIGHT: f32 = DEFAULT_CANVAS_HEIGHT / 4.0;
    /// Pixels per frame
    pub const DEFAULT_PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults (size is the diameter)
    pub const DEFAULT_BALL_SIZE: f32 = DEFAULT_PADDLE_WIDTH * 1.5;
    pub const DEFAULT_BALL_SPEED: f32 = DEFAULT_PADDLE_SPEED / 4.0;
    /// Added to ball speed on every paddle hit (uncapped)
    pub const BALL_SPEED_INCREMENT: f32 = 1.0;

    /// Points needed to win a match
    pub const DEFAULT_MAX_SCORE: u32 = 5;

    /// Key identifiers (DOM `KeyboardEvent.code` values)
    pub const KEY_LEFT_UP: &str = "KeyW";
    pub const KEY_LEFT_DOWN: &str = "KeyS";
    pub const KEY_RIGHT_UP: &str = "ArrowUp";
    pub const KEY_RIGHT_DOWN: &str = "ArrowDown";
    pub const KEY_ESCAPE: &str = "Escape";
}
