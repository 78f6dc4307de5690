//! Terminal falling-block game runner (default binary).
//!
//! Takes no arguments; see [`term_blocks::Config`] for the environment
//! variables it reads.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};

use term_blocks::config::{ColorMode, Config, DisplayMode};
use term_blocks::core::Engine;
use term_blocks::input::{EventSource, ScriptedEvents, TerminalEvents};
use term_blocks::logging::init_log;
use term_blocks::term::{AnsiPalette, Display, HeadlessDisplay, Palette, RgbPalette, TerminalRenderer};
use term_blocks::types::{FRAME_MS, GAME_OVER_HOLD_MS};
use term_blocks::{GameLoop, LoopState};

type Game = GameLoop<Box<dyn EventSource>, Box<dyn Display>>;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_log(config.log_level, &config.log_file)?;

    let seed = config.resolve_seed();
    info!(
        "starting: seed {}, {:?} colours, {:?} display",
        seed, config.color, config.display
    );

    let palette: Box<dyn Palette> = match config.color {
        ColorMode::Ansi => Box::new(AnsiPalette),
        ColorMode::Rgb => Box::new(RgbPalette),
    };
    let (events, display): (Box<dyn EventSource>, Box<dyn Display>) = match config.display {
        DisplayMode::Terminal => (
            Box::new(TerminalEvents::new()),
            Box::new(TerminalRenderer::new(palette)),
        ),
        DisplayMode::Headless => (
            Box::new(ScriptedEvents::default()),
            Box::new(HeadlessDisplay::new()),
        ),
    };

    let mut game: Game = GameLoop::new(Engine::standard(seed), events, display);
    game.display_mut().enter()?;

    let result = run(&mut game);

    // Always try to restore terminal state.
    if let Err(err) = game.display_mut().exit() {
        warn!("failed to restore terminal: {:#}", err);
    }
    info!("final score {}", game.engine().current_score());
    result
}

fn run(game: &mut Game) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis() as u32;
        last = now;

        match game.frame(elapsed_ms)? {
            LoopState::Running => {}
            // Quitting ends the game the same way losing does.
            LoopState::Quit | LoopState::GameOver => break,
        }

        // Wake early on input, otherwise after one frame.
        game.events_mut().wait(frame)?;
    }

    game.finish()?;
    thread::sleep(Duration::from_millis(GAME_OVER_HOLD_MS as u64));
    Ok(())
}
