use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::App;

/// One full-terminal view in a [`ScreenStack`].
///
/// # Lifecycle
///
/// ```text
/// Create
///   ↓
/// on_active() ←──────────┐
///   ↓                     │
/// (Foreground)            │ screen above is popped
///   ↓                     │
/// on_inactive()           │
///   ↓                     │
/// (Background) ──────────┘
///   ↓
/// on_close()  ← Pop/Replace/Exit only
///   ↓
/// Drop
/// ```
///
/// Only the foreground screen receives events and is drawn. The lifecycle hooks
/// do nothing by default.
///
/// ```rust
/// use crossterm::event::{Event, KeyCode};
/// use ratatui::{Frame, widgets::Paragraph};
/// use ratatui_runtime::{Screen, ScreenTransition};
///
/// #[derive(Debug)]
/// struct Hello;
///
/// impl Screen for Hello {
///     fn handle_event(&mut self, event: &Event) -> ScreenTransition {
///         match event.as_key_event().map(|key| key.code) {
///             Some(KeyCode::Char('q')) => ScreenTransition::Exit,
///             _ => ScreenTransition::Stay,
///         }
///     }
///
///     fn draw(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new("hello"), frame.area());
///     }
/// }
/// ```
pub trait Screen: fmt::Debug {
    /// Called when this screen reaches the foreground: at startup, when pushed,
    /// and when the screen above it is popped.
    fn on_active(&mut self) {}

    /// Called when this screen leaves the foreground, whether it stays on the
    /// stack (Push) or is about to be removed (Pop/Replace/Exit).
    fn on_inactive(&mut self) {}

    /// Called after [`on_inactive`](Self::on_inactive) when this screen is
    /// removed from the stack for good.
    fn on_close(&mut self) {}

    /// Handles a terminal event and returns the transition to apply.
    fn handle_event(&mut self, event: &Event) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    Push(Box<dyn Screen>),

    /// Close the current screen and return to the one below.
    Pop,

    /// Close the current screen and put a new one in its place.
    Replace(Box<dyn Screen>),

    /// Close every screen and exit.
    Exit,
}

/// Screen stack manager that implements [`App`].
///
/// The application exits once the stack is empty.
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    /// Number of screens on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    fn apply_transition(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Push(mut screen) => {
                if let Some(current) = self.screens.last_mut() {
                    current.on_inactive();
                }
                screen.on_active();
                self.screens.push(screen);
            }
            ScreenTransition::Pop => {
                self.close_top();
                if let Some(previous) = self.screens.last_mut() {
                    previous.on_active();
                }
            }
            ScreenTransition::Replace(mut screen) => {
                self.close_top();
                screen.on_active();
                self.screens.push(screen);
            }
            ScreenTransition::Exit => {
                while !self.screens.is_empty() {
                    self.close_top();
                }
                self.should_exit = true;
            }
        }
    }

    fn close_top(&mut self) {
        if let Some(mut screen) = self.screens.pop() {
            screen.on_inactive();
            screen.on_close();
        }
    }
}

impl App for ScreenStack<'_> {
    fn init(&mut self) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active();
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(&event);
            self.apply_transition(transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, widgets::Paragraph};

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct CallLog(Rc<RefCell<Vec<String>>>);

    impl CallLog {
        fn push(&self, msg: String) {
            self.0.borrow_mut().push(msg);
        }

        fn take(&self) -> Vec<String> {
            self.0.take()
        }
    }

    /// Records lifecycle calls and answers every event with a queued transition.
    #[derive(Debug)]
    struct Recorder {
        name: &'static str,
        log: CallLog,
        next: Option<ScreenTransition>,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &CallLog) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                next: None,
            })
        }

        fn then(mut self: Box<Self>, transition: ScreenTransition) -> Box<Self> {
            self.next = Some(transition);
            self
        }
    }

    impl Screen for Recorder {
        fn on_active(&mut self) {
            self.log.push(format!("{}: on_active", self.name));
        }

        fn on_inactive(&mut self) {
            self.log.push(format!("{}: on_inactive", self.name));
        }

        fn on_close(&mut self) {
            self.log.push(format!("{}: on_close", self.name));
        }

        fn handle_event(&mut self, _event: &Event) -> ScreenTransition {
            self.log.push(format!("{}: handle_event", self.name));
            self.next.take().unwrap_or(ScreenTransition::Stay)
        }

        fn draw(&self, frame: &mut Frame) {
            frame.render_widget(Paragraph::new(self.name), frame.area());
        }
    }

    fn key() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    fn started(log: &CallLog) -> ScreenStack<'static> {
        let mut stack = ScreenStack::new(Recorder::boxed("menu", log));
        stack.init();
        log.take();
        stack
    }

    #[test]
    fn test_init_activates_initial_screen() {
        let log = CallLog::default();
        let mut stack = ScreenStack::new(Recorder::boxed("menu", &log));
        stack.init();
        assert_eq!(log.take(), ["menu: on_active"]);
    }

    #[test]
    fn test_push_keeps_screen_below_open() {
        let log = CallLog::default();
        let mut stack = started(&log);
        stack.apply_transition(ScreenTransition::Push(Recorder::boxed("drill", &log)));
        assert_eq!(log.take(), ["menu: on_inactive", "drill: on_active"]);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_pop_from_event_reactivates_screen_below() {
        let log = CallLog::default();
        let mut stack = started(&log);
        let drill = Recorder::boxed("drill", &log).then(ScreenTransition::Pop);
        stack.apply_transition(ScreenTransition::Push(drill));
        log.take();

        stack.handle_event(key());
        assert_eq!(
            log.take(),
            [
                "drill: handle_event",
                "drill: on_inactive",
                "drill: on_close",
                "menu: on_active",
            ]
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_replace_closes_current_screen() {
        let log = CallLog::default();
        let mut stack = started(&log);
        stack.apply_transition(ScreenTransition::Push(Recorder::boxed("drill", &log)));
        log.take();

        stack.apply_transition(ScreenTransition::Replace(Recorder::boxed("result", &log)));
        assert_eq!(
            log.take(),
            ["drill: on_inactive", "drill: on_close", "result: on_active"]
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_exit_closes_top_down() {
        let log = CallLog::default();
        let mut stack = started(&log);
        stack.apply_transition(ScreenTransition::Push(Recorder::boxed("drill", &log)));
        log.take();

        stack.apply_transition(ScreenTransition::Exit);
        assert_eq!(
            log.take(),
            [
                "drill: on_inactive",
                "drill: on_close",
                "menu: on_inactive",
                "menu: on_close",
            ]
        );
        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_last_screen_exits() {
        let log = CallLog::default();
        let mut stack = ScreenStack::new(Recorder::boxed("menu", &log).then(ScreenTransition::Pop));
        stack.init();
        assert!(!stack.should_exit());

        stack.handle_event(key());
        assert!(stack.should_exit());
    }

    #[test]
    fn test_stay_touches_nothing() {
        let log = CallLog::default();
        let mut stack = started(&log);
        stack.apply_transition(ScreenTransition::Stay);
        assert!(log.take().is_empty());
    }

    #[test]
    fn test_only_foreground_screen_is_drawn() {
        let log = CallLog::default();
        let mut stack = started(&log);
        stack.apply_transition(ScreenTransition::Push(Recorder::boxed("drill", &log)));

        let mut terminal = Terminal::new(TestBackend::new(10, 1)).unwrap();
        terminal.draw(|frame| stack.draw(frame)).unwrap();
        terminal.backend().assert_buffer_lines(["drill     "]);
    }
}
