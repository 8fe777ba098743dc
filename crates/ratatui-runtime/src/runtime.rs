use std::io;

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// Runs an application on the terminal until it asks to exit.
///
/// 1. Calls `app.init()`
/// 2. Until `app.should_exit()` returns true:
///    - draws with `app.draw()` when the screen is out of date
///    - otherwise blocks for the next terminal event and passes it to
///      `app.handle_event()`
///
/// The terminal is restored on return, including on error.
pub fn run<A>(app: &mut A) -> io::Result<()>
where
    A: App,
{
    app.init();
    let mut events = EventLoop::new();

    ratatui::run(|terminal| {
        while !app.should_exit() {
            match events.next()? {
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => {
                    app.handle_event(event);
                }
            }
        }
        Ok(())
    })
}
