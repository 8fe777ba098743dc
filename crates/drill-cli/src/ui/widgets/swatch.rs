use drill_engine::ColorSample;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

use crate::ui::widgets::style;

/// A bordered block filled with one color.
#[derive(Debug)]
pub struct Swatch<'a> {
    color: &'a ColorSample,
    title: String,
}

impl<'a> Swatch<'a> {
    pub fn new(color: &'a ColorSample, title: impl Into<String>) -> Self {
        Self {
            color,
            title: title.into(),
        }
    }
}

impl Widget for Swatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().title(Line::from(format!(" {} ", self.title)).centered());
        let inner = block.inner(area);
        block.render(area, buf);
        buf.set_style(inner, Style::new().bg(style::swatch_color(self.color)));
    }
}
