//! Displays: where finished frames go.
//!
//! [`TerminalRenderer`] flushes a framebuffer to the real terminal, redrawing
//! only the runs of glyphs that changed since the previous frame.
//! [`HeadlessDisplay`] just keeps the last frame.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::palette::{Palette, Style};

/// Sink for finished frames.
pub trait Display {
    /// Prepare the output device.
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    /// Restore the output device.
    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Show a frame.
    ///
    /// The display may swap the caller's buffer with its own previous frame,
    /// so callers should repaint the whole buffer before the next call.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Forget the previous frame so the next one is drawn in full.
    fn invalidate(&mut self) {}
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn enter(&mut self) -> Result<()> {
        (**self).enter()
    }

    fn exit(&mut self) -> Result<()> {
        (**self).exit()
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }

    fn invalidate(&mut self) {
        (**self).invalidate()
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    palette: Box<dyn Palette>,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(palette: Box<dyn Palette>) -> Self {
        Self {
            stdout: io::stdout(),
            palette,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, self.palette.as_ref(), &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                debug!("frame size changed to {}x{}", fb.width(), fb.height());
                encode_full_into(fb, self.palette.as_ref(), &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, self.palette.as_ref(), &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Display for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }

    fn invalidate(&mut self) {
        self.last = None;
    }
}

/// Keeps the last presented frame in memory.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    last: Option<FrameBuffer>,
    presented: u64,
    invalidated: u64,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn invalidated(&self) -> u64 {
        self.invalidated
    }
}

impl Display for HeadlessDisplay {
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        self.presented += 1;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.invalidated += 1;
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, palette: &dyn Palette, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Style> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let glyph = fb.get(x, y).unwrap_or_default();
            let style = palette.style(glyph.color);
            if current != Some(style) {
                apply_style_into(out, style)?;
                current = Some(style);
            }
            out.queue(Print(glyph.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    palette: &dyn Palette,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<Style> = None;
    let mut changed = false;

    for_each_changed_run(prev, next, |x, y, len| {
        changed = true;
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = next.get(x + dx, y).unwrap_or_default();
            let style = palette.style(glyph.color);
            if current != Some(style) {
                apply_style_into(out, style)?;
                current = Some(style);
            }
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    })?;

    if changed {
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(style.fg))?;
    out.queue(SetBackgroundColor(style.bg))?;
    Ok(())
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
