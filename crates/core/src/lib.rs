//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state with no dependency on a
//! terminal or any other I/O. Output goes through the [`draw::Surface`]
//! trait, and shapes come from a [`rng::ShapePicker`], so a seeded picker
//! reproduces a whole game.
//!
//! # Module Structure
//!
//! - [`board`]: walled grid of cells, full-row detection and row collapse
//! - [`piece`]: square grid for the falling block, moves and rotation
//! - [`patterns`]: the seven shape patterns
//! - [`engine`]: input handling, locking, clearing, spawning and game over
//! - [`scoring`]: score awards and gravity speed-up
//! - [`rng`]: shape selection
//! - [`draw`]: the drawing seam consumed by a display
//!
//! # Example
//!
//! ```
//! use term_blocks_core::{Engine, Outcome, SequencePicker};
//! use term_blocks_core::types::{GameAction, Shape};
//!
//! let mut engine = Engine::new(20, 12, 4, SequencePicker::repeat(Shape::O));
//! assert_eq!(engine.apply_action(GameAction::HardDrop), Outcome::Moved);
//! assert_eq!(engine.step_down(), Outcome::Locked { rows_cleared: 0 });
//! assert_eq!(engine.current_score(), 0);
//! ```

pub mod board;
pub mod draw;
pub mod engine;
pub mod patterns;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use term_blocks_types as types;

pub use board::Board;
pub use draw::{cell_to_screen, draw_cell, draw_message, Surface, CELL_GLYPH_WIDTH};
pub use engine::{overlap, Engine, GameStatus, Outcome, GAME_OVER_TEXT};
pub use patterns::{pattern, PATTERNS};
pub use piece::Piece;
pub use rng::{SequencePicker, ShapePicker, SimpleRng, UniformPicker};
pub use scoring::{apply_speedup, award_for_streak, Award};
