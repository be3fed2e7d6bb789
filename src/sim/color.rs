//! Palette shared by drawables and the draw surface

use serde::{Deserialize, Serialize};

/// Named palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black,
    White,
    Red,
    Green,
    Blue,
}

impl Color {
    /// Channels as `[r, g, b, a]`
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Color::Black => [0, 0, 0, 0],
            Color::White => [255, 255, 255, 255],
            Color::Red => [255, 0, 0, 255],
            Color::Green => [0, 255, 0, 255],
            Color::Blue => [0, 0, 255, 255],
        }
    }

    /// Packed `0xRRGGBBAA`, the layout of the canvas buffers
    pub fn packed(self) -> u32 {
        u32::from_be_bytes(self.rgba())
    }
}
