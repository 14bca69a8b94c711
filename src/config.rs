//! Game configuration
//!
//! Fixed at initialization, never reloaded. Values are taken as-is: nothing
//! here is validated, so a negative speed or an oversized paddle simply
//! produces whatever the physics formulas make of it.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::error::GameError;

/// Paddle construction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Top-left corner. Left unset, the paddle is seated at its edge of the
    /// surface, vertically centered.
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub up: String,
    pub down: String,
    pub color: Color,
    /// Pixels per frame
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PADDLE_WIDTH,
            height: DEFAULT_PADDLE_HEIGHT,
            x: None,
            y: None,
            up: KEY_LEFT_UP.to_string(),
            down: KEY_LEFT_DOWN.to_string(),
            color: Color::DarkGray,
            speed: DEFAULT_PADDLE_SPEED,
        }
    }
}

impl PaddleConfig {
    /// Left paddle: W/S keys, seated at the left padding edge
    pub fn left() -> Self {
        Self::default()
    }

    /// Right paddle: arrow keys, seated at the right padding edge
    pub fn right() -> Self {
        Self {
            up: KEY_RIGHT_UP.to_string(),
            down: KEY_RIGHT_DOWN.to_string(),
            ..Self::default()
        }
    }
}

/// Ball construction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Diameter
    pub size: f32,
    /// Opening center, the middle of the surface when unset
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub dx: f32,
    pub dy: f32,
    /// Opening speed. Every later serve starts at [`DEFAULT_BALL_SPEED`].
    pub speed: f32,
    /// Opening color. Every later serve uses the default palette color.
    pub color: Color,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BALL_SIZE,
            x: None,
            y: None,
            dx: 1.0,
            dy: 0.0,
            speed: DEFAULT_BALL_SPEED,
            color: Color::DarkGray,
        }
    }
}

/// Score construction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub p1: u32,
    pub p2: u32,
    pub max_score: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            p1: 0,
            p2: 0,
            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Surface dimensions in pixels
    pub width: f32,
    pub height: f32,
    /// Horizontal gap between a paddle and its edge of the surface
    pub paddle_padding: f32,
    pub left: PaddleConfig,
    pub right: PaddleConfig,
    pub ball: BallConfig,
    pub score: ScoreConfig,
    /// Clear color of the surface
    pub background: Color,
    /// Write per-frame debug readouts
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            paddle_padding: DEFAULT_PADDLE_PADDING,
            left: PaddleConfig::left(),
            right: PaddleConfig::right(),
            ball: BallConfig::default(),
            score: ScoreConfig::default(),
            background: Color::White,
            debug: false,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config = serde_json::from_str(json)?;
        log::info!("Loaded game config from JSON");
        Ok(config)
    }

    /// Read a JSON override from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Round-start seat (top-left) of the left paddle
    pub fn left_seat(&self, paddle_height: f32) -> (f32, f32) {
        (self.paddle_padding, self.height / 2.0 - paddle_height / 2.0)
    }

    /// Round-start seat (top-left) of the right paddle
    pub fn right_seat(&self, paddle_width: f32, paddle_height: f32) -> (f32, f32) {
        (
            self.width - self.paddle_padding - paddle_width,
            self.height / 2.0 - paddle_height / 2.0,
        )
    }

    /// Serve position of the ball (surface center)
    pub fn serve_point(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}
