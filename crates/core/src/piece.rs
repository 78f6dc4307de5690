//! Piece module - the falling block
//!
//! A piece is a small square grid of cells plus a position locating the
//! grid's top-left corner on the board. The grid size never changes after
//! construction; spawning re-stamps the cells and resets the position.

use crate::patterns::pattern;
use crate::types::{Cell, Coord, Shape};

/// Square grid of cells positioned in board space
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    size: usize,
    /// Row-major, `size * size` cells
    cells: Vec<Cell>,
    position: Coord,
}

impl Clone for Piece {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
            position: self.position,
        }
    }

    /// Reuses the cell allocation.
    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.cells.clone_from(&source.cells);
        self.position = source.position;
    }
}

impl Piece {
    /// Create an empty `size x size` piece at `position`
    pub fn new(size: usize, position: Coord) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            position,
        }
    }

    pub fn width(&self) -> usize {
        self.size
    }

    pub fn height(&self) -> usize {
        self.size
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    /// Cell at local (row, col)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Stamp the cells from a pattern string.
    ///
    /// All cells are cleared first, then character `i` is decoded into cell
    /// `(i / size, i % size)`. Unrecognized characters stamp `Empty`,
    /// characters beyond the grid are ignored.
    pub fn init(&mut self, pattern: &str) {
        self.cells.fill(Cell::Empty);
        for (cell, ch) in self.cells.iter_mut().zip(pattern.chars()) {
            *cell = Cell::from_pattern_char(ch);
        }
    }

    /// Stamp the cells of `shape` from the pattern table
    pub fn stamp(&mut self, shape: Shape) {
        self.init(pattern(shape));
    }

    pub fn move_left(&mut self) {
        self.position.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.position.x += 1;
    }

    pub fn move_up(&mut self) {
        self.position.y -= 1;
    }

    pub fn move_down(&mut self) {
        self.position.y += 1;
    }

    /// Rotate the cell contents 90° clockwise in place.
    ///
    /// Each ring of the square is rotated with a 4-way cyclic swap, so every
    /// 4-cycle is visited exactly once and no scratch grid is needed.
    pub fn rotate_right(&mut self) {
        let n = self.size;
        for x in 0..n / 2 {
            for y in x..n - x - 1 {
                let top = x * n + y;
                let left = (n - 1 - y) * n + x;
                let bottom = (n - 1 - x) * n + (n - 1 - y);
                let right = y * n + (n - 1 - x);

                let tmp = self.cells[top];
                self.cells[top] = self.cells[left];
                self.cells[left] = self.cells[bottom];
                self.cells[bottom] = self.cells[right];
                self.cells[right] = tmp;
            }
        }
    }

    /// Non-empty cells with their board coordinates
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        let origin = self.position;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(move |(i, &cell)| {
                let local = Coord::new((i % size) as i16, (i / size) as i16);
                (origin.offset(local.x, local.y), cell)
            })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
