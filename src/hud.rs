//! Text readouts: game status prompt, score and debug telemetry
//!
//! Sinks are write-only. The game never reads anything back from them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sim::{GameState, Phase, Score};

pub const IDLE_PROMPT: &str = "Press any key to begin...";
pub const PAUSED_PROMPT: &str = "Press ESC to unpause...";
pub const LOAD_FAILED: &str = "failed to load game";

/// Somewhere a line of text can be shown
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<T: TextSink> TextSink for Rc<RefCell<T>> {
    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text);
    }
}

#[cfg(target_arch = "wasm32")]
impl TextSink for web_sys::Element {
    fn set_text(&mut self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Per-frame debug readouts
#[derive(Debug, Default)]
pub struct DebugSinks<T> {
    pub p1: T,
    pub p2: T,
    pub ball_pos: T,
    pub ball_dir: T,
}

/// All text outputs of the game
#[derive(Debug)]
pub struct Hud<T> {
    pub status: T,
    pub score: T,
    pub debug: Option<DebugSinks<T>>,
}

impl<T: TextSink> Hud<T> {
    pub fn new(status: T, score: T) -> Self {
        Self {
            status,
            score,
            debug: None,
        }
    }

    pub fn with_debug(mut self, debug: DebugSinks<T>) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Prompt for the phase a frame ran in
    pub fn show_phase(&mut self, phase: Phase) {
        let text = match phase {
            Phase::Paused => PAUSED_PROMPT,
            Phase::Running => "",
            Phase::Idle => IDLE_PROMPT,
        };
        self.status.set_text(text);
    }

    pub fn show_score(&mut self, score: &Score) {
        self.score.set_text(&format!("{} : {}", score.p1, score.p2));
    }

    pub fn show_load_failure(&mut self) {
        self.status.set_text(LOAD_FAILED);
    }

    /// Positions with 3 significant digits, direction with 2
    pub fn show_debug(&mut self, state: &GameState) {
        let Some(debug) = self.debug.as_mut() else {
            return;
        };
        let (p1, p2, ball) = (&state.p1, &state.p2, &state.ball);
        debug.p1.set_text(&format!(
            "p1: x {} y {}",
            to_precision(p1.pos.x, 3),
            to_precision(p1.pos.y, 3)
        ));
        debug.p2.set_text(&format!(
            "p2: x {} y {}",
            to_precision(p2.pos.x, 3),
            to_precision(p2.pos.y, 3)
        ));
        debug.ball_pos.set_text(&format!(
            "ball: x {} y {}",
            to_precision(ball.pos.x, 3),
            to_precision(ball.pos.y, 3)
        ));
        debug.ball_dir.set_text(&format!(
            "dir: x {} y {}",
            to_precision(ball.dir.x, 2),
            to_precision(ball.dir.y, 2)
        ));
    }
}

/// Format with `digits` significant digits, switching to exponent notation
/// when the exponent is below -6 or at least `digits` (JavaScript
/// `Number.prototype.toPrecision` rules).
pub fn to_precision(value: f32, digits: usize) -> String {
    let digits = digits.max(1);
    let value = value as f64;
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Drop the sign of -0
    let value = if value == 0.0 { 0.0 } else { value };

    // Exponent after rounding to `digits` significant digits
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -6 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}
