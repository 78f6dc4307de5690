//! Framebuffer of coloured glyphs.
//!
//! Colours are kept as [`ColorId`]s; a palette resolves them to terminal
//! colours only when a frame is encoded.

use crate::types::ColorId;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: ColorId,
}

impl Glyph {
    pub const fn new(ch: char, color: ColorId) -> Self {
        Self { ch, color }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            color: ColorId::Default,
        }
    }
}

/// 2D framebuffer of coloured glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Glyph::default());
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Glyph::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, color: ColorId) {
        self.set(x, y, Glyph::new(ch, color));
    }

    /// Write `s` starting at (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, color: ColorId) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, color);
            cx += 1;
        }
    }

    /// Characters of row `y` as a string; empty outside the buffer.
    pub fn row_text(&self, y: u16) -> String {
        match self.idx(0, y) {
            Some(start) => self.cells[start..start + self.width as usize]
                .iter()
                .map(|g| g.ch)
                .collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(3, 0, 'x', ColorId::Text);
        fb.put_char(0, 2, 'x', ColorId::Text);
        assert!(fb.cells().iter().all(|g| *g == Glyph::default()));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "abcdef", ColorId::Text);
        assert_eq!(fb.row_text(0), " abc");
        assert_eq!(fb.get(1, 0), Some(Glyph::new('a', ColorId::Text)));
    }

    #[test]
    fn resize_and_clear() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(1, 1, 'z', ColorId::Z);
        fb.resize(3, 3);
        assert_eq!(fb.cells().len(), 9);
        fb.clear();
        assert!(fb.cells().iter().all(|g| *g == Glyph::default()));
        assert_eq!(fb.row_text(5), "");
    }
}
