//! Drawing seam between the engine and a character-cell display
//!
//! The engine only knows about an abstract [`Surface`]: a cursor, a current
//! colour and single-glyph output. Every board cell is two glyphs wide to
//! compensate for the usual terminal glyph aspect ratio.

use std::fmt;

use crate::types::{Cell, ColorId, Coord};

/// Glyph columns per board cell
pub const CELL_GLYPH_WIDTH: i16 = 2;

/// Character-cell output consumed by [`crate::Engine::draw`]
pub trait Surface {
    fn move_cursor(&mut self, at: Coord);

    /// Print one glyph at the cursor and advance it
    fn print(&mut self, glyph: char);

    fn print_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.print(ch);
        }
    }

    /// Print formatted text without building an intermediate `String`
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(&mut SurfaceWriter(self), args);
    }

    fn set_color(&mut self, color: ColorId);

    /// Marks the end of a frame
    fn refresh(&mut self);
}

/// `fmt::Write` over a surface's cursor
struct SurfaceWriter<'a, S: Surface + ?Sized>(&'a mut S);

impl<S: Surface + ?Sized> fmt::Write for SurfaceWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.print_str(s);
        Ok(())
    }
}

/// Screen position of board cell (x, y) for a board drawn at `origin`
pub fn cell_to_screen(origin: Coord, x: i16, y: i16) -> Coord {
    Coord::new(origin.x + x * CELL_GLYPH_WIDTH, origin.y + y)
}

/// Paint one board cell as a block of blank glyphs in the cell's colour
pub fn draw_cell<S: Surface + ?Sized>(surface: &mut S, origin: Coord, x: i16, y: i16, cell: Cell) {
    surface.set_color(ColorId::for_cell(cell));
    surface.move_cursor(cell_to_screen(origin, x, y));
    for _ in 0..CELL_GLYPH_WIDTH {
        surface.print(' ');
    }
}

/// Print a line of text in the default colour and refresh
pub fn draw_message<S: Surface + ?Sized>(surface: &mut S, at: Coord, text: &str) {
    surface.set_color(ColorId::Default);
    surface.move_cursor(at);
    surface.print_str(text);
    surface.refresh();
}
