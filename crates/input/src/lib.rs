//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`] and provides
//! non-blocking event sources. A frame drains whatever input is pending and
//! never waits for a key.

pub mod map;
pub mod source;

pub use term_blocks_types as types;

pub use map::{handle_key_event, map_event, map_key, should_quit};
pub use source::{drain_pending, EventSource, ScriptedEvents, TerminalEvents, MAX_EVENTS_PER_FRAME};
