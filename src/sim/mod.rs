//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One step per frame, speeds in pixels per frame
//! - Randomness only through an injected RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{crosses_left_paddle, crosses_right_paddle, hits_wall, rebound_dy};
pub use input::InputEvent;
pub use state::{Ball, GameEvent, GameState, KeyState, Paddle, Phase, Score, Side};
pub use tick::{run_frame, update_ball, update_paddles};
