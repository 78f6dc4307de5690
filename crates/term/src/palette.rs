//! Colour palettes: resolve [`ColorId`]s to terminal colours.
//!
//! Glyphs are always white; the colour of a block is its background.

use crossterm::style::Color;

use crate::types::ColorId;

/// Foreground and background of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

pub trait Palette {
    fn style(&self, color: ColorId) -> Style;
}

impl<P: Palette + ?Sized> Palette for Box<P> {
    fn style(&self, color: ColorId) -> Style {
        (**self).style(color)
    }
}

/// 16-colour palette, works on any terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn style(&self, color: ColorId) -> Style {
        let bg = match color {
            ColorId::Default => Color::Black,
            ColorId::I => Color::DarkYellow,
            ColorId::O | ColorId::Text => Color::DarkRed,
            ColorId::T => Color::Magenta,
            ColorId::L => Color::Red,
            ColorId::J => Color::Blue,
            ColorId::S => Color::DarkGreen,
            ColorId::Z => Color::DarkCyan,
            ColorId::Wall => Color::DarkGrey,
        };
        Style {
            fg: Color::White,
            bg,
        }
    }
}

/// Truecolor palette with the same hues.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbPalette;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

impl Palette for RgbPalette {
    fn style(&self, color: ColorId) -> Style {
        let bg = match color {
            ColorId::Default => rgb(0, 0, 0),
            ColorId::I => rgb(205, 160, 0),
            ColorId::O | ColorId::Text => rgb(160, 20, 20),
            ColorId::T => rgb(190, 60, 200),
            ColorId::L => rgb(235, 60, 50),
            ColorId::J => rgb(50, 90, 230),
            ColorId::S => rgb(30, 150, 50),
            ColorId::Z => rgb(0, 150, 160),
            ColorId::Wall => rgb(90, 90, 90),
        };
        Style {
            fg: rgb(235, 235, 235),
            bg,
        }
    }
}
