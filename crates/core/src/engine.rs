//! Engine module - the game state machine
//!
//! The engine owns the board, the single falling piece and the score/speed
//! counters. Every intent is tried on a candidate copy of the piece; the
//! candidate replaces the live piece only if it does not overlap the board.
//! A blocked downward intent locks the live piece, clears full rows and
//! spawns the next piece.

use log::{debug, info};

use crate::board::Board;
use crate::draw::{draw_cell, draw_message, Surface};
use crate::piece::Piece;
use crate::rng::{ShapePicker, UniformPicker};
use crate::scoring::{apply_speedup, award_for_streak};
use crate::types::{
    ColorId, Coord, GameAction, InputEvent, BOARD_COLUMNS, BOARD_ROWS, INITIAL_SPEED_MS,
    PIECE_SIZE,
};

/// Rows at the top of the board checked for game over
const GAME_OVER_ROWS: usize = 2;

/// Text shown once the session has ended
pub const GAME_OVER_TEXT: &str = "Game over!";

/// Whether the engine still accepts moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Result of one input step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not an actionable event, or the game is over
    Ignored,
    /// The candidate fitted and replaced the live piece
    Moved,
    /// The candidate overlapped and was discarded
    Blocked,
    /// The piece landed, rows were cleared and a new piece spawned
    Locked { rows_cleared: u32 },
    /// The quit key was pressed
    Quit,
}

/// True if any non-empty cell of `candidate` sits on a non-empty board cell.
///
/// Walls are non-empty, so leaving the play area counts as a collision.
pub fn overlap(candidate: &Piece, board: &Board) -> bool {
    candidate
        .occupied()
        .any(|(at, _)| board.is_occupied(at.x, at.y))
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<P: ShapePicker = UniformPicker> {
    finish: bool,
    status: GameStatus,
    board: Board,
    piece: Piece,
    /// Scratch piece reused for every candidate move
    candidate: Piece,
    score: u32,
    speed_ms: u32,
    picker: P,
}

impl Engine<UniformPicker> {
    /// Standard 20x12 board with 4x4 pieces and uniform shape selection
    pub fn standard(seed: u32) -> Self {
        Self::new(
            BOARD_ROWS,
            BOARD_COLUMNS,
            PIECE_SIZE,
            UniformPicker::new(seed),
        )
    }
}

impl<P: ShapePicker> Engine<P> {
    /// Create a game and stamp the first piece
    pub fn new(rows: usize, columns: usize, piece_size: usize, picker: P) -> Self {
        let spawn = spawn_position(columns, piece_size);
        let mut engine = Self {
            finish: false,
            status: GameStatus::Playing,
            board: Board::new(rows, columns),
            piece: Piece::new(piece_size, spawn),
            candidate: Piece::new(piece_size, spawn),
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            picker,
        };
        engine.spawn();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn board_width(&self) -> usize {
        self.board.width()
    }

    pub fn board_height(&self) -> usize {
        self.board.height()
    }

    pub fn piece_width(&self) -> usize {
        self.piece.width()
    }

    pub fn piece_height(&self) -> usize {
        self.piece.height()
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    /// Current gravity interval in milliseconds
    pub fn current_speed(&self) -> u32 {
        self.speed_ms
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Quit was requested
    pub fn is_finished(&self) -> bool {
        self.finish
    }

    /// Handle one input event
    ///
    /// Only key events are actionable; unbound keys, mouse and resize events
    /// are ignored.
    pub fn handle_input(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Key(key) => match GameAction::from_key(key) {
                Some(action) => self.apply_action(action),
                None => Outcome::Ignored,
            },
            InputEvent::Mouse(_) | InputEvent::Resize { .. } => Outcome::Ignored,
        }
    }

    /// Gravity step injected by the timing loop
    pub fn step_down(&mut self) -> Outcome {
        self.apply_action(GameAction::MoveDown)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Outcome {
        if self.status == GameStatus::GameOver && action != GameAction::Quit {
            return Outcome::Ignored;
        }

        self.candidate.clone_from(&self.piece);
        match action {
            GameAction::Quit => {
                self.finish = true;
                return Outcome::Quit;
            }
            GameAction::Rotate => self.candidate.rotate_right(),
            GameAction::MoveLeft => self.candidate.move_left(),
            GameAction::MoveRight => self.candidate.move_right(),
            GameAction::MoveDown => self.candidate.move_down(),
            GameAction::HardDrop => self.drop_candidate(),
        }

        if !overlap(&self.candidate, &self.board) {
            std::mem::swap(&mut self.piece, &mut self.candidate);
            Outcome::Moved
        } else if action.is_downward() {
            let rows_cleared = self.land();
            Outcome::Locked { rows_cleared }
        } else {
            Outcome::Blocked
        }
    }

    /// Push the candidate down until it overlaps, then back up one row.
    ///
    /// Steps are always one row, so the row above the first overlap is free.
    /// The step count is bounded so an all-empty piece cannot loop forever.
    fn drop_candidate(&mut self) {
        let max_steps = self.board.height() + self.piece.height();
        for _ in 0..max_steps {
            if overlap(&self.candidate, &self.board) {
                break;
            }
            self.candidate.move_down();
        }
        self.candidate.move_up();
    }

    /// Lock the live piece, clear rows, spawn the next piece and check for
    /// game over. Returns the number of rows cleared.
    fn land(&mut self) -> u32 {
        let at = self.piece.position();
        self.apply_block();
        let rows_cleared = self.clear_full_rows();
        debug!(
            "piece locked at ({}, {}), {} row(s) cleared, score {}",
            at.x, at.y, rows_cleared, self.score
        );

        self.spawn();
        if self.is_game_over() {
            info!("game over with score {}", self.score);
        }
        rows_cleared
    }

    /// Merge the live piece into the board
    pub fn apply_block(&mut self) {
        for (at, cell) in self.piece.occupied() {
            self.board.set(at.x, at.y, cell);
        }
    }

    /// Clear full rows bottom to top and award each unbroken streak.
    ///
    /// Row 0 is never examined. After a row is collapsed the same index is
    /// examined again, since the row above has moved into it. Returns the
    /// total number of rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut total = 0;
        let mut streak = 0;
        let mut y = self.board.height() as isize - 2;

        while y > 0 {
            if self.board.is_row_full(y as usize) {
                self.board.collapse_row(y as usize);
                streak += 1;
                total += 1;
            } else {
                self.award(streak);
                streak = 0;
                y -= 1;
            }
        }
        self.award(streak);

        total
    }

    fn award(&mut self, streak: u32) {
        let award = award_for_streak(streak);
        if award.score == 0 {
            return;
        }
        self.score += award.score;
        let before = self.speed_ms;
        self.speed_ms = apply_speedup(self.speed_ms, award.speedup_ms);
        debug!(
            "streak of {} row(s): +{} score, speed {}ms -> {}ms",
            streak, award.score, before, self.speed_ms
        );
    }

    /// Re-stamp the piece with a random shape at the top centre
    pub fn spawn(&mut self) {
        let shape = self.picker.pick();
        self.piece.stamp(shape);
        self.piece
            .set_position(spawn_position(self.board.width(), self.piece.width()));
    }

    /// Check the spawn area and latch the game-over state.
    ///
    /// The spawn area is the top two rows within
    /// `[width / 2 - piece_width / 2, width / 2 + piece_width / 2)`.
    pub fn is_game_over(&mut self) -> bool {
        if self.status == GameStatus::GameOver {
            return true;
        }

        let center = (self.board.width() / 2) as i16;
        let half = (self.piece.width() / 2) as i16;
        let rows = GAME_OVER_ROWS.min(self.board.playable_rows().len()) as i16;
        let blocked = (0..rows).any(|y| {
            (center - half..center + half).any(|x| {
                self.board
                    .get(x, y)
                    .map_or(false, |cell| !cell.is_empty())
            })
        });

        if blocked {
            self.status = GameStatus::GameOver;
        }
        blocked
    }

    /// Paint the board, the live piece and the score line, then refresh
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let origin = self.board.origin();

        for y in 0..self.board.height() as i16 {
            for x in 0..self.board.width() as i16 {
                if let Some(cell) = self.board.get(x, y) {
                    draw_cell(surface, origin, x, y, cell);
                }
            }
        }

        for (at, cell) in self.piece.occupied() {
            if self.board.get(at.x, at.y).is_some() {
                draw_cell(surface, origin, at.x, at.y, cell);
            }
        }

        surface.set_color(ColorId::Text);
        surface.move_cursor(Coord::new(origin.x, self.board.height() as i16 + origin.y));
        surface.print_fmt(format_args!("Score: {}", self.score));
        surface.refresh();
    }

    /// Paint the final banner
    pub fn draw_game_over<S: Surface + ?Sized>(&self, surface: &mut S) {
        let at = Coord::new(
            self.board.width() as i16,
            (self.board.height() / 2) as i16,
        );
        draw_message(surface, at, GAME_OVER_TEXT);
    }

    /// Replace the live piece (position included)
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Mutable board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Top-centre spawn position
fn spawn_position(columns: usize, piece_size: usize) -> Coord {
    Coord::new((columns / 2) as i16 - (piece_size / 2) as i16, 0)
}
