//! Key mapping from terminal events to engine input.

use crate::types::{GameAction, InputEvent, Key, MouseEvent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent as TermMouseEvent,
    MouseEventKind,
};

/// Map a crossterm key to an engine key.
pub fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Key::Interrupt
        }
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    }
}

/// Map a terminal event to an engine input event.
///
/// Key presses and repeats are kept, releases are dropped. Only mouse button
/// presses are reported. Resizes are passed on so the screen can be redrawn.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            Some(InputEvent::Key(map_key(key)))
        }
        Event::Mouse(TermMouseEvent {
            kind: MouseEventKind::Down(_),
            column,
            row,
            ..
        }) => Some(InputEvent::Mouse(MouseEvent { column, row })),
        Event::Resize(columns, rows) => Some(InputEvent::Resize { columns, rows }),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    GameAction::from_key(map_key(key))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    handle_key_event(key) == Some(GameAction::Quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveDown)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(GameAction::MoveDown)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::Rotate)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_map_key_keeps_characters() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), Key::Char('z'));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), Key::Other);
    }

    #[test]
    fn test_release_events_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert_eq!(
            map_event(Event::Key(repeat)),
            Some(InputEvent::Key(Key::Char('a')))
        );
    }

    #[test]
    fn test_mouse_down_is_reported() {
        let down = TermMouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_event(Event::Mouse(down)),
            Some(InputEvent::Mouse(MouseEvent { column: 7, row: 3 }))
        );

        let moved = TermMouseEvent {
            kind: MouseEventKind::Moved,
            ..down
        };
        assert_eq!(map_event(Event::Mouse(moved)), None);
        assert_eq!(map_event(Event::FocusGained), None);
    }

    #[test]
    fn test_resize_is_reported() {
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize {
                columns: 120,
                rows: 40
            })
        );
    }
}
