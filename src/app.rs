//! Game loop: input, gravity and presentation, one frame at a time.
//!
//! The loop owns the engine and its collaborators. Time is passed in by the
//! caller, so the loop itself never sleeps or reads a clock.

use anyhow::Result;
use log::{debug, info};

use crate::core::{Engine, GameStatus, Outcome, ShapePicker, UniformPicker};
use crate::input::{drain_pending, EventSource};
use crate::term::{Canvas, Display};
use crate::types::{InputEvent, CONSOLE_HEIGHT, CONSOLE_WIDTH};

/// State after one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    GameOver,
    Quit,
}

pub struct GameLoop<E, D, P = UniformPicker>
where
    E: EventSource,
    D: Display,
    P: ShapePicker,
{
    engine: Engine<P>,
    canvas: Canvas,
    events: E,
    display: D,
    /// Time since the last gravity step
    since_step_ms: u32,
}

impl<E, D, P> GameLoop<E, D, P>
where
    E: EventSource,
    D: Display,
    P: ShapePicker,
{
    pub fn new(engine: Engine<P>, events: E, display: D) -> Self {
        Self {
            engine,
            canvas: Canvas::new(CONSOLE_WIDTH, CONSOLE_HEIGHT),
            events,
            display,
            since_step_ms: 0,
        }
    }

    pub fn engine(&self) -> &Engine<P> {
        &self.engine
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Run one frame after `elapsed_ms` of wall time.
    ///
    /// Pending input is applied first. Once more than the engine's speed has
    /// accumulated, one gravity step is injected. The frame is then drawn and
    /// presented.
    pub fn frame(&mut self, elapsed_ms: u32) -> Result<LoopState> {
        for event in drain_pending(&mut self.events)? {
            if let InputEvent::Resize { columns, rows } = event {
                debug!("terminal resized to {}x{}", columns, rows);
                self.display.invalidate();
                continue;
            }
            if self.engine.handle_input(event) == Outcome::Quit {
                info!("quit requested with score {}", self.engine.current_score());
                return Ok(LoopState::Quit);
            }
        }

        self.since_step_ms = self.since_step_ms.saturating_add(elapsed_ms);
        if self.since_step_ms > self.engine.current_speed() {
            self.since_step_ms = 0;
            self.engine.step_down();
            self.engine.is_game_over();
        }

        self.render()?;

        Ok(match self.engine.status() {
            GameStatus::Playing => LoopState::Running,
            GameStatus::GameOver => LoopState::GameOver,
        })
    }

    /// Paint the current state and present it
    pub fn render(&mut self) -> Result<()> {
        self.canvas.clear();
        self.engine.draw(&mut self.canvas);
        self.display.present(self.canvas.frame_mut())
    }

    /// Paint the final banner over the last state and present it
    pub fn finish(&mut self) -> Result<()> {
        self.canvas.clear();
        self.engine.draw(&mut self.canvas);
        self.engine.draw_game_over(&mut self.canvas);
        self.display.present(self.canvas.frame_mut())
    }

    /// Hand back the collaborators, e.g. to restore the terminal
    pub fn into_parts(self) -> (Engine<P>, E, D) {
        (self.engine, self.events, self.display)
    }
}
