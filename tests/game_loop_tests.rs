//! Game loop with scripted input and the headless display

use term_blocks::core::{Engine, SequencePicker};
use term_blocks::input::ScriptedEvents;
use term_blocks::term::HeadlessDisplay;
use term_blocks::types::{Coord, InputEvent, Key, MouseEvent, Shape};
use term_blocks::{GameLoop, LoopState};

type TestLoop = GameLoop<ScriptedEvents, HeadlessDisplay, SequencePicker>;

fn new_loop(shape: Shape) -> TestLoop {
    GameLoop::new(
        Engine::new(20, 12, 4, SequencePicker::repeat(shape)),
        ScriptedEvents::default(),
        HeadlessDisplay::new(),
    )
}

fn key(ch: char) -> InputEvent {
    InputEvent::Key(Key::Char(ch))
}

#[test]
fn test_frame_presents_board() {
    let mut game = new_loop(Shape::O);
    assert_eq!(game.frame(50).unwrap(), LoopState::Running);
    assert_eq!(game.display().presented(), 1);

    let frame = game.display().last().unwrap();
    assert!(frame.row_text(21).starts_with("  Score: 0"));
}

#[test]
fn test_input_is_applied_before_gravity() {
    let mut game = new_loop(Shape::O);
    game.events_mut().push(key('a'));
    game.events_mut().push(key('a'));
    game.events_mut().push(InputEvent::Mouse(MouseEvent { column: 4, row: 4 }));
    game.frame(0).unwrap();
    assert_eq!(game.engine().piece().position(), Coord::new(2, 0));
    assert!(game.events_mut().is_empty());
}

#[test]
fn test_gravity_needs_more_than_speed() {
    let mut game = new_loop(Shape::O);
    for _ in 0..10 {
        game.frame(50).unwrap();
    }
    // Exactly 500ms accumulated: not yet.
    assert_eq!(game.engine().piece().position(), Coord::new(4, 0));

    game.frame(50).unwrap();
    assert_eq!(game.engine().piece().position(), Coord::new(4, 1));

    // The accumulator restarts after a step.
    game.frame(50).unwrap();
    assert_eq!(game.engine().piece().position(), Coord::new(4, 1));
}

#[test]
fn test_quit_stops_the_loop() {
    let mut game = new_loop(Shape::T);
    game.events_mut().push(key('d'));
    game.events_mut().push(key('q'));
    game.events_mut().push(key('d'));
    assert_eq!(game.frame(50).unwrap(), LoopState::Quit);
    assert!(game.engine().is_finished());
    assert_eq!(game.engine().piece().position(), Coord::new(5, 0));
    // Quit returns before presenting.
    assert_eq!(game.display().presented(), 0);
}

#[test]
fn test_quit_then_finish_shows_banner() {
    let mut game = new_loop(Shape::T);
    game.events_mut().push(key('q'));
    assert_eq!(game.frame(0).unwrap(), LoopState::Quit);

    game.finish().unwrap();
    assert_eq!(game.display().presented(), 1);
    let frame = game.display().last().unwrap();
    assert_eq!(&frame.row_text(10)[12..22], "Game over!");
    assert!(frame.row_text(21).starts_with("  Score: 0"));
}

#[test]
fn test_resize_forces_full_redraw() {
    let mut game = new_loop(Shape::O);
    game.events_mut().push(InputEvent::Resize { columns: 100, rows: 40 });
    game.events_mut().push(key('a'));
    assert_eq!(game.frame(0).unwrap(), LoopState::Running);

    assert_eq!(game.display().invalidated(), 1);
    assert_eq!(game.display().presented(), 1);
    // Input after the resize is still applied.
    assert_eq!(game.engine().piece().position(), Coord::new(3, 0));
}

#[test]
fn test_interrupt_quits() {
    let mut game = new_loop(Shape::T);
    game.events_mut().push(InputEvent::Key(Key::Interrupt));
    assert_eq!(game.frame(0).unwrap(), LoopState::Quit);
}

#[test]
fn test_runs_to_game_over_and_shows_banner() {
    let mut game = new_loop(Shape::O);
    let mut frames = 0;
    let state = loop {
        game.events_mut().push(key(' '));
        match game.frame(600).unwrap() {
            LoopState::Running => frames += 1,
            other => break other,
        }
        assert!(frames < 100, "game never ended");
    };
    assert_eq!(state, LoopState::GameOver);

    game.finish().unwrap();
    let frame = game.display().last().unwrap();
    assert_eq!(&frame.row_text(10)[12..22], "Game over!");
}
