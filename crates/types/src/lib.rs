//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The standard playfield includes its own boundary walls:
//!
//! - **Rows**: 20 (indexed 0-19, row 19 is the bottom wall)
//! - **Columns**: 12 (indexed 0-11, columns 0 and 11 are side walls)
//! - **Piece grid**: 4x4, spawned at column `12 / 2 - 4 / 2 = 4`, row 0
//!
//! # Speed
//!
//! Speed is the interval between forced downward steps, in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 500 | Gravity interval at game start |
//! | `MIN_SPEED_MS` | 150 | Floor; clears never push the interval below it |
//! | `SMALL_CLEAR_SPEEDUP_MS` | 5 | Applied for a 1-3 row streak |
//! | `BIG_CLEAR_SPEEDUP_MS` | 10 | Applied for a streak of 4 or more rows |
//!
//! # Examples
//!
//! ```
//! use term_blocks_types::{Cell, GameAction, Key, Shape};
//!
//! assert_eq!(Cell::from_pattern_char('T'), Cell::T);
//! assert_eq!(Cell::from_pattern_char('.'), Cell::Empty);
//! assert_eq!(Cell::from_shape(Shape::O), Cell::O);
//!
//! assert_eq!(GameAction::from_key(Key::Char('w')), Some(GameAction::Rotate));
//! assert_eq!(GameAction::from_key(Key::Char(' ')), Some(GameAction::HardDrop));
//! assert_eq!(GameAction::from_key(Key::Char('x')), None);
//! ```

/// Board height in cells, including the bottom wall row
pub const BOARD_ROWS: usize = 20;

/// Board width in cells, including both side walls
pub const BOARD_COLUMNS: usize = 12;

/// Side length of the square piece grid
pub const PIECE_SIZE: usize = 4;

/// Gravity interval at game start (500ms per row)
pub const INITIAL_SPEED_MS: u32 = 500;

/// Gravity interval floor (150ms)
pub const MIN_SPEED_MS: u32 = 150;

/// Rows in one unbroken streak needed for the big award
pub const BIG_CLEAR_ROWS: u32 = 4;

/// Score for a streak of 1-3 cleared rows
pub const SMALL_CLEAR_SCORE: u32 = 10;

/// Speedup for a streak of 1-3 cleared rows
pub const SMALL_CLEAR_SPEEDUP_MS: u32 = 5;

/// Score for a streak of 4 or more cleared rows
pub const BIG_CLEAR_SCORE: u32 = 100;

/// Speedup for a streak of 4 or more cleared rows
pub const BIG_CLEAR_SPEEDUP_MS: u32 = 10;

/// Screen position of the board's top-left cell
pub const BOARD_ORIGIN: Coord = Coord::new(2, 1);

/// Interval between input polls / redraws of the game loop
pub const FRAME_MS: u32 = 50;

/// How long the final "Game over!" banner stays on screen
pub const GAME_OVER_HOLD_MS: u32 = 5000;

/// Console size the layout is designed for (columns)
pub const CONSOLE_WIDTH: u16 = 80;

/// Console size the layout is designed for (rows)
pub const CONSOLE_HEIGHT: u16 = 30;

/// The seven tetromino shapes
///
/// The order of [`Shape::ALL`] is the order of the pattern table, so
/// `Shape::ALL[i].index() == i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Shape {
    /// All shapes in pattern-table order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::L,
        Shape::J,
        Shape::S,
        Shape::Z,
    ];

    /// Position of this shape in [`Shape::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Shape::I => 0,
            Shape::O => 1,
            Shape::T => 2,
            Shape::L => 3,
            Shape::J => 4,
            Shape::S => 5,
            Shape::Z => 6,
        }
    }

    /// Uppercase letter used for this shape in the pattern table
    ///
    /// ```
    /// use term_blocks_types::Shape;
    ///
    /// assert_eq!(Shape::L.letter(), 'L');
    /// ```
    pub fn letter(&self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::L => 'L',
            Shape::J => 'J',
            Shape::S => 'S',
            Shape::Z => 'Z',
        }
    }
}

/// State of a single board or piece cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn from_shape(shape: Shape) -> Self {
        match shape {
            Shape::I => Cell::I,
            Shape::O => Cell::O,
            Shape::T => Cell::T,
            Shape::L => Cell::L,
            Shape::J => Cell::J,
            Shape::S => Cell::S,
            Shape::Z => Cell::Z,
        }
    }

    /// Shape this cell was stamped from, if any
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Cell::I => Some(Shape::I),
            Cell::O => Some(Shape::O),
            Cell::T => Some(Shape::T),
            Cell::L => Some(Shape::L),
            Cell::J => Some(Shape::J),
            Cell::S => Some(Shape::S),
            Cell::Z => Some(Shape::Z),
            Cell::Empty | Cell::Wall => None,
        }
    }

    /// Decode one pattern character
    ///
    /// Shape letters are case-sensitive. Anything that is not one of the
    /// seven uppercase shape letters decodes to [`Cell::Empty`]; there is no
    /// error for malformed pattern data.
    pub fn from_pattern_char(ch: char) -> Self {
        match ch {
            'I' => Cell::I,
            'O' => Cell::O,
            'T' => Cell::T,
            'L' => Cell::L,
            'J' => Cell::J,
            'S' => Cell::S,
            'Z' => Cell::Z,
            _ => Cell::Empty,
        }
    }
}

/// Integer coordinate, `x` grows to the right and `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Keyboard key as seen by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Esc,
    /// Ctrl-C in raw mode
    Interrupt,
    Other,
}

/// Mouse button press position in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
}

/// Event produced by the input source
///
/// The source reports "no event" as `None` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Mouse(MouseEvent),
    /// The terminal changed size; the screen must be redrawn in full
    Resize { columns: u16, rows: u16 },
}

/// Player intents understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// End the session (distinct from game over)
    Quit,
    /// Rotate the piece 90° clockwise
    Rotate,
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Move the piece one row down, locking it if blocked
    MoveDown,
    /// Drop the piece to the lowest free position; the next downward step locks it
    HardDrop,
}

impl GameAction {
    /// Map a key to its fixed binding
    ///
    /// ```
    /// use term_blocks_types::{GameAction, Key};
    ///
    /// assert_eq!(GameAction::from_key(Key::Char('Q')), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_key(Key::Left), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_key(Key::Other), None);
    /// ```
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::Interrupt => Some(GameAction::Quit),
            Key::Char('w') | Key::Char('W') | Key::Up => Some(GameAction::Rotate),
            Key::Char('a') | Key::Char('A') | Key::Left => Some(GameAction::MoveLeft),
            Key::Char('d') | Key::Char('D') | Key::Right => Some(GameAction::MoveRight),
            Key::Char('s') | Key::Char('S') | Key::Down => Some(GameAction::MoveDown),
            Key::Char(' ') => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    /// Whether a blocked attempt of this action locks the piece
    pub fn is_downward(&self) -> bool {
        matches!(self, GameAction::MoveDown | GameAction::HardDrop)
    }
}

/// Colour slot requested by the engine when drawing
///
/// The rendering collaborator decides what each slot looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorId {
    #[default]
    Default,
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
    Wall,
    Text,
}

impl ColorId {
    pub fn for_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => ColorId::Default,
            Cell::Wall => ColorId::Wall,
            Cell::I => ColorId::I,
            Cell::O => ColorId::O,
            Cell::T => ColorId::T,
            Cell::L => ColorId::L,
            Cell::J => ColorId::J,
            Cell::S => ColorId::S,
            Cell::Z => ColorId::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_index_matches_table_order() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
        }
    }

    #[test]
    fn pattern_letters_round_trip_through_cells() {
        for shape in Shape::ALL {
            let cell = Cell::from_pattern_char(shape.letter());
            assert_eq!(cell, Cell::from_shape(shape));
            assert_eq!(cell.shape(), Some(shape));
        }
    }

    #[test]
    fn unknown_pattern_chars_decode_to_empty() {
        for ch in ['.', ' ', 'x', 'i', 'o', '#', '0'] {
            assert_eq!(Cell::from_pattern_char(ch), Cell::Empty, "char {:?}", ch);
        }
    }

    #[test]
    fn default_cell_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::Wall.is_empty());
        assert!(Cell::Wall.is_wall());
        assert_eq!(Cell::Wall.shape(), None);
    }

    #[test]
    fn downward_actions() {
        assert!(GameAction::MoveDown.is_downward());
        assert!(GameAction::HardDrop.is_downward());
        assert!(!GameAction::Rotate.is_downward());
        assert!(!GameAction::MoveLeft.is_downward());
        assert!(!GameAction::Quit.is_downward());
    }

    #[test]
    fn quit_bindings() {
        for key in [Key::Char('q'), Key::Char('Q'), Key::Esc, Key::Interrupt] {
            assert_eq!(GameAction::from_key(key), Some(GameAction::Quit));
        }
    }

    #[test]
    fn cell_colors() {
        assert_eq!(ColorId::for_cell(Cell::Empty), ColorId::Default);
        assert_eq!(ColorId::for_cell(Cell::Wall), ColorId::Wall);
        assert_eq!(ColorId::for_cell(Cell::J), ColorId::J);
    }

    #[test]
    fn spawn_column_for_standard_board() {
        assert_eq!(BOARD_COLUMNS / 2 - PIECE_SIZE / 2, 4);
        assert_eq!(BOARD_ORIGIN, Coord::new(2, 1));
    }
}
