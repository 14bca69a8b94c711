//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The drawing surface or its drawing context could not be created
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read game config: {0}")]
    Io(#[from] std::io::Error),
}
