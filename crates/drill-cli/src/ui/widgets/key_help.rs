use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys and what they do, e.g. `(&["←", "→"], "Adjust")`.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const TEXT_STYLE: Style = Style::new().fg(Color::Gray);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

/// One centred line of key bindings.
#[derive(Debug)]
pub struct KeyHelp<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyHelp<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

impl Widget for KeyHelp<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut spans = vec![];
        for (i, (keys, action)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            spans.push(Span::styled(keys.join("/"), KEY_STYLE));
            spans.push(Span::styled(format!(" {action}"), TEXT_STYLE));
        }
        Line::from(spans).centered().render(area, buf);
    }
}
