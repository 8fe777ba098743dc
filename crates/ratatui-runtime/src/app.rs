use crossterm::event::Event;
use ratatui::Frame;

/// Trait for TUI applications driven by [`run`](crate::run).
pub trait App {
    /// Called once before the first frame is drawn.
    fn init(&mut self);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: Event);

    /// Draws the whole frame.
    fn draw(&self, frame: &mut Frame);
}
