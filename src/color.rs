//! Fixed color palette
//!
//! Every fill color used by the game comes from this 9-entry palette.

use serde::{Deserialize, Serialize};

/// Palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    DarkGray,
    LightBlue,
    White,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    Yellow,
}

impl Color {
    /// CSS color string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::DarkGray => "#222222",
            Color::LightBlue => "lightblue",
            Color::White => "white",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }

    /// RGBA in 0-1 range (sRGB values of the CSS colors)
    pub fn rgba(&self) -> [f32; 4] {
        let (r, g, b) = match self {
            Color::DarkGray => (0x22, 0x22, 0x22),
            Color::LightBlue => (0xad, 0xd8, 0xe6),
            Color::White => (0xff, 0xff, 0xff),
            Color::Green => (0x00, 0x80, 0x00),
            Color::Blue => (0x00, 0x00, 0xff),
            Color::Purple => (0x80, 0x00, 0x80),
            Color::Pink => (0xff, 0xc0, 0xcb),
            Color::Red => (0xff, 0x00, 0x00),
            Color::Yellow => (0xff, 0xff, 0x00),
        };
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    /// Same as [`rgba`](Self::rgba) but in linear space, for sRGB render targets
    pub fn linear_rgba(&self) -> [f32; 4] {
        let [r, g, b, a] = self.rgba();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
