use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Drill title, level or round counter, and the instruction for the current round.
#[derive(Debug)]
pub struct DrillHeader<'a> {
    title: &'a str,
    progress: String,
    instruction: &'a str,
}

impl<'a> DrillHeader<'a> {
    pub fn new(title: &'a str, progress: String, instruction: &'a str) -> Self {
        Self {
            title,
            progress,
            instruction,
        }
    }
}

impl Widget for DrillHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .title(Line::from(Span::styled(format!(" {} ", self.title), style::TITLE)))
            .title(Line::from(format!(" {} ", self.progress)).right_aligned());
        Paragraph::new(self.instruction)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
