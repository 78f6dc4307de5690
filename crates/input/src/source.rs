//! Non-blocking event sources.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Upper bound on events handled in one frame
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// A source of input events that never blocks on `read_event`.
pub trait EventSource {
    /// Next pending event, or `None` if nothing is pending.
    fn read_event(&mut self) -> Result<Option<InputEvent>>;

    /// Wait up to `timeout` for input to arrive.
    ///
    /// Sources without a real device just sleep for `timeout`.
    fn wait(&mut self, timeout: Duration) -> Result<()> {
        std::thread::sleep(timeout);
        Ok(())
    }
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        (**self).read_event()
    }

    fn wait(&mut self, timeout: Duration) -> Result<()> {
        (**self).wait(timeout)
    }
}

/// Events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        // Skip events that do not map (releases, focus, paste) while more are pending.
        while event::poll(Duration::ZERO)? {
            if let Some(mapped) = map_event(event::read()?) {
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }

    fn wait(&mut self, timeout: Duration) -> Result<()> {
        event::poll(timeout)?;
        Ok(())
    }
}

/// Replays a queue of events; used for tests and scripted play.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    queue: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.queue.pop_front())
    }
}

/// Collect the events pending at one frame, at most [`MAX_EVENTS_PER_FRAME`].
///
/// Events beyond the bound stay queued in the source for the next frame.
pub fn drain_pending<S: EventSource + ?Sized>(
    source: &mut S,
) -> Result<ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>> {
    let mut events = ArrayVec::new();
    while !events.is_full() {
        match source.read_event()? {
            Some(event) => events.push(event),
            None => break,
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Key, MouseEvent};

    #[test]
    fn test_scripted_events_replay_in_order() {
        let mut source = ScriptedEvents::new([
            InputEvent::Key(Key::Char('a')),
            InputEvent::Mouse(MouseEvent { column: 1, row: 2 }),
        ]);
        assert_eq!(
            source.read_event().unwrap(),
            Some(InputEvent::Key(Key::Char('a')))
        );
        assert_eq!(
            source.read_event().unwrap(),
            Some(InputEvent::Mouse(MouseEvent { column: 1, row: 2 }))
        );
        assert_eq!(source.read_event().unwrap(), None);
    }

    #[test]
    fn test_drain_pending_empties_source() {
        let mut source = ScriptedEvents::default();
        assert!(drain_pending(&mut source).unwrap().is_empty());

        source.push(InputEvent::Key(Key::Left));
        source.push(InputEvent::Key(Key::Right));
        let events = drain_pending(&mut source).unwrap();
        assert_eq!(
            events.as_slice(),
            &[InputEvent::Key(Key::Left), InputEvent::Key(Key::Right)]
        );
        assert!(source.is_empty());
    }

    #[test]
    fn test_drain_pending_is_bounded() {
        let mut source =
            ScriptedEvents::new((0..40).map(|_| InputEvent::Key(Key::Down)));
        let first = drain_pending(&mut source).unwrap();
        assert_eq!(first.len(), MAX_EVENTS_PER_FRAME);
        assert_eq!(source.len(), 8);

        let boxed: &mut dyn EventSource = &mut source;
        assert_eq!(drain_pending(boxed).unwrap().len(), 8);
    }
}
