//! Terminal "game renderer" module.
//!
//! The engine paints through the [`core::Surface`] trait into a [`Canvas`],
//! which is backed by a simple framebuffer. A [`Display`] then shows the
//! finished frame, either on the real terminal or nowhere at all.
//!
//! Every board cell is 2 glyphs wide, so the board keeps a roughly square
//! aspect ratio.

pub mod canvas;
pub mod fb;
pub mod palette;
pub mod renderer;

pub use term_blocks_core as core;
pub use term_blocks_types as types;

pub use canvas::Canvas;
pub use fb::{FrameBuffer, Glyph};
pub use palette::{AnsiPalette, Palette, RgbPalette, Style};
pub use renderer::{encode_diff_into, encode_full_into, Display, HeadlessDisplay, TerminalRenderer};
