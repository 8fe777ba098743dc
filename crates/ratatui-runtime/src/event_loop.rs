use std::io;

use crossterm::event::{self, Event, KeyEventKind};

use crate::event::TuiEvent;

/// Alternates renders and terminal events.
///
/// A render is produced at startup and after every event that reached the
/// application. Key release and repeat events are dropped before they get
/// there, so they never trigger a redraw.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self { dirty: true }
    }

    /// Returns the next event, blocking until the terminal delivers one.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        self.next_from(event::read)
    }

    fn next_from<F>(&mut self, mut read: F) -> io::Result<TuiEvent>
    where
        F: FnMut() -> io::Result<Event>,
    {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        loop {
            let event = read()?;
            if is_ignored(&event) {
                continue;
            }
            self.dirty = true;
            return Ok(event.into());
        }
    }
}

fn is_ignored(event: &Event) -> bool {
    event
        .as_key_event()
        .is_some_and(|key| key.kind != KeyEventKind::Press)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    use super::*;

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn drain(events: Vec<Event>) -> Vec<&'static str> {
        let mut queue = VecDeque::from(events);
        let mut event_loop = EventLoop::new();
        let mut read = || {
            queue
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        };
        let mut seen = vec![];
        while let Ok(event) = event_loop.next_from(&mut read) {
            seen.push(match event {
                TuiEvent::Render => "render",
                TuiEvent::Crossterm(Event::Resize(..)) => "resize",
                TuiEvent::Crossterm(_) => "key",
            });
        }
        seen
    }

    #[test]
    fn test_renders_first_and_after_each_event() {
        let events = vec![key(KeyEventKind::Press), Event::Resize(80, 24)];
        assert_eq!(drain(events), vec!["render", "key", "render", "resize", "render"]);
    }

    #[test]
    fn test_key_releases_do_not_redraw() {
        let events = vec![
            key(KeyEventKind::Press),
            key(KeyEventKind::Release),
            key(KeyEventKind::Repeat),
            key(KeyEventKind::Press),
        ];
        assert_eq!(drain(events), vec!["render", "key", "render", "key", "render"]);
    }
}
