//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The rules live in `term_blocks_core`, terminal input in
//! `term_blocks_input` and rendering in `term_blocks_term`. This package
//! re-exports them and adds the game loop, configuration and logging used by
//! the binary.

pub mod app;
pub mod config;
pub mod logging;

pub use term_blocks_core as core;
pub use term_blocks_input as input;
pub use term_blocks_term as term;
pub use term_blocks_types as types;

pub use app::{GameLoop, LoopState};
pub use config::{ColorMode, Config, DisplayMode};
