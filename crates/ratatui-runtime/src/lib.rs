//! A small event-driven terminal runtime on top of `ratatui` and `crossterm`.
//!
//! Applications implement [`App`] directly or build on [`ScreenStack`], which
//! routes events to the foreground [`Screen`] and applies the [`ScreenTransition`]
//! it returns. [`run`] owns the terminal: it draws once at startup and then once
//! after every input event. There is no timer; an idle application does no work.

pub use self::{
    app::App,
    runtime::run,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
