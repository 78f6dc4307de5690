//! Board module - manages the walled game grid
//!
//! The board is a rows x columns grid whose left column, right column and
//! bottom row are permanent walls. Uses a flat vector in row-major order.
//! Coordinates: (x, y) where x is the column and y the row, (0, 0) top-left.
//!
//! Because the border is made of non-empty cells, any piece cell that would
//! leave the play area sideways or downwards already collides with a wall.

use crate::types::{Cell, Coord, BOARD_ORIGIN};

/// The game board with its boundary walls
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
    /// Screen placement only, not used by gameplay
    origin: Coord,
}

impl Board {
    /// Create a board and stamp its walls.
    ///
    /// Boards narrower than 3 columns or shorter than 2 rows have no
    /// playable cells but are still well formed.
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut cells = vec![Cell::Empty; rows * columns];

        for y in 0..rows {
            if columns > 0 {
                cells[y * columns] = Cell::Wall;
                cells[y * columns + columns - 1] = Cell::Wall;
            }
        }
        if rows > 0 {
            let bottom = (rows - 1) * columns;
            for cell in &mut cells[bottom..bottom + columns] {
                *cell = Cell::Wall;
            }
        }

        Self {
            rows,
            columns,
            cells,
            origin: BOARD_ORIGIN,
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows {
            return None;
        }
        Some((y as usize) * self.columns + (x as usize))
    }

    /// Number of columns, walls included
    pub fn width(&self) -> usize {
        self.columns
    }

    /// Number of rows, bottom wall included
    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Rows pieces can occupy (everything above the bottom wall)
    pub fn playable_rows(&self) -> std::ops::Range<usize> {
        0..self.rows.saturating_sub(1)
    }

    /// Columns pieces can occupy (everything between the side walls)
    pub fn playable_columns(&self) -> std::ops::Range<usize> {
        1..self.columns.saturating_sub(1).max(1)
    }

    /// Get cell at (x, y), `None` outside the grid
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y)
    ///
    /// Returns false for coordinates outside the grid and for wall cells,
    /// which are never overwritten.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) if !self.cells[idx].is_wall() => {
                self.cells[idx] = cell;
                true
            }
            _ => false,
        }
    }

    /// Whether (x, y) blocks a piece cell.
    ///
    /// Walls and locked blocks are occupied. Coordinates outside the grid are
    /// reported occupied as well so collision checks never index out of range.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        self.get(x, y).map_or(true, |cell| !cell.is_empty())
    }

    /// Check if every playable cell of row `y` is filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if !self.playable_rows().contains(&y) || self.playable_columns().is_empty() {
            return false;
        }
        let start = y * self.columns;
        self.playable_columns()
            .all(|x| !self.cells[start + x].is_empty())
    }

    /// Remove row `y` by shifting every row above it down by one.
    ///
    /// Only playable columns are copied, the walls stay where they are.
    /// The top row's playable cells become empty.
    pub fn collapse_row(&mut self, y: usize) {
        if !self.playable_rows().contains(&y) || self.playable_columns().is_empty() {
            return;
        }

        let width = self.columns;
        let columns = self.playable_columns();
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells
                .copy_within(src + columns.start..src + columns.end, dst + columns.start);
        }

        for cell in &mut self.cells[columns] {
            *cell = Cell::Empty;
        }
    }

    /// Row `y` as a slice, walls included
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_COLUMNS, BOARD_ROWS};

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(20, 12);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(11, 0), Some(11));
        assert_eq!(board.index(0, 1), Some(12));
        assert_eq!(board.index(11, 19), Some(239));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(12, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_walls_stamped_on_construction() {
        let board = Board::default();
        assert_eq!(board.width(), BOARD_COLUMNS);
        assert_eq!(board.height(), BOARD_ROWS);

        for y in 0..BOARD_ROWS as i16 {
            for x in 0..BOARD_COLUMNS as i16 {
                let on_border =
                    x == 0 || x == BOARD_COLUMNS as i16 - 1 || y == BOARD_ROWS as i16 - 1;
                let expected = if on_border { Cell::Wall } else { Cell::Empty };
                assert_eq!(board.get(x, y), Some(expected), "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_set_refuses_walls() {
        let mut board = Board::new(6, 6);
        assert!(!board.set(0, 2, Cell::T));
        assert!(!board.set(5, 2, Cell::T));
        assert!(!board.set(3, 5, Cell::Empty));
        assert_eq!(board.get(3, 5), Some(Cell::Wall));

        assert!(board.set(3, 2, Cell::T));
        assert_eq!(board.get(3, 2), Some(Cell::T));
    }

    #[test]
    fn test_out_of_grid_is_occupied() {
        let board = Board::new(6, 6);
        assert!(board.is_occupied(-1, 0));
        assert!(board.is_occupied(0, -1));
        assert!(board.is_occupied(6, 0));
        assert!(board.is_occupied(2, 6));
        assert!(!board.is_occupied(2, 2));
    }

    #[test]
    fn test_row_full_ignores_walls() {
        let mut board = Board::new(6, 6);
        assert!(!board.is_row_full(4));
        for x in 1..5 {
            board.set(x, 4, Cell::I);
        }
        assert!(board.is_row_full(4));
        // The bottom wall row is never considered full.
        assert!(!board.is_row_full(5));
    }

    #[test]
    fn test_collapse_row_shifts_playable_cells() {
        let mut board = Board::new(6, 6);
        board.set(2, 0, Cell::Z);
        board.set(1, 2, Cell::O);
        board.set(3, 3, Cell::S);
        for x in 1..5 {
            board.set(x, 4, Cell::I);
        }

        board.collapse_row(4);

        assert_eq!(board.get(3, 4), Some(Cell::S));
        assert_eq!(board.get(1, 3), Some(Cell::O));
        assert_eq!(board.get(2, 1), Some(Cell::Z));
        assert!(board.row(0)[1..5].iter().all(Cell::is_empty));
        // Walls unchanged.
        for y in 0..6 {
            assert_eq!(board.get(0, y), Some(Cell::Wall));
            assert_eq!(board.get(5, y), Some(Cell::Wall));
        }
    }

    #[test]
    fn test_tiny_board_has_no_playable_cells() {
        let board = Board::new(2, 2);
        assert!(board.cells().iter().all(Cell::is_wall));
        assert!(board.playable_columns().is_empty());
    }
}
