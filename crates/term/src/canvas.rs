//! Canvas: a [`Surface`] that paints into a [`FrameBuffer`].

use crate::core::Surface;
use crate::fb::FrameBuffer;
use crate::types::{ColorId, Coord};

/// Cursor-addressed drawing target backed by a framebuffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: FrameBuffer,
    cursor: Coord,
    color: ColorId,
    frames: u64,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            cursor: Coord::default(),
            color: ColorId::Default,
            frames: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Number of completed frames (calls to `refresh`).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Blank the framebuffer and home the cursor.
    pub fn clear(&mut self) {
        self.fb.clear();
        self.cursor = Coord::default();
        self.color = ColorId::Default;
    }
}

impl Surface for Canvas {
    fn move_cursor(&mut self, at: Coord) {
        self.cursor = at;
    }

    fn print(&mut self, glyph: char) {
        if self.cursor.x >= 0 && self.cursor.y >= 0 {
            self.fb
                .put_char(self.cursor.x as u16, self.cursor.y as u16, glyph, self.color);
        }
        self.cursor.x = self.cursor.x.saturating_add(1);
    }

    fn set_color(&mut self, color: ColorId) {
        self.color = color;
    }

    fn refresh(&mut self) {
        self.frames += 1;
    }
}
