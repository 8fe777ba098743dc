use drill_engine::{Session, SessionState};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// The round's outcome once it has been scored, or a prompt to submit.
#[derive(Debug)]
pub struct RoundBanner<'a> {
    session: &'a Session,
}

impl<'a> RoundBanner<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl Widget for RoundBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let line = match (self.session.state(), self.session.last_score()) {
            (SessionState::Playing, _) | (_, None) => {
                Line::from(Span::styled("Press Enter when it looks right", style::DIM))
            }
            (state, Some(score)) => {
                let score_style = Style::new()
                    .fg(style::score_color(score))
                    .add_modifier(Modifier::BOLD);
                let next = if state.is_final_result() {
                    "Enter: see results"
                } else {
                    "Enter: next round"
                };
                Line::from(vec![
                    Span::raw("Score: "),
                    Span::styled(format!("{score}/100"), score_style),
                    Span::raw(format!("   Total: {}   ", self.session.total())),
                    Span::styled(next, style::DIM),
                ])
            }
        };
        Paragraph::new(line.centered())
            .block(Block::bordered())
            .render(area, buf);
    }
}
