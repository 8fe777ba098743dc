use crossterm::event::Event;
use drill_engine::{DrillKind, RoundScore, Session, SessionSummary};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use ratatui_runtime::{Screen, ScreenTransition};

use crate::ui::widgets::style;

/// Final grade of a finished session. Any key returns to the menu.
#[derive(Debug)]
pub struct SummaryScreen {
    kind: DrillKind,
    summary: SessionSummary,
    scores: Vec<RoundScore>,
}

impl SummaryScreen {
    /// Returns `None` until the session is finished.
    pub fn from_session(session: &Session) -> Option<Self> {
        Some(Self {
            kind: session.kind(),
            summary: session.summary()?,
            scores: session.scores().to_vec(),
        })
    }
}

impl Screen for SummaryScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        if event.as_key_event().is_some() {
            ScreenTransition::Pop
        } else {
            ScreenTransition::Stay
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let SessionSummary {
            average,
            tier,
            total,
            rounds,
        } = self.summary;
        let score_style = Style::new()
            .fg(style::score_color(average))
            .add_modifier(Modifier::BOLD);
        let round_scores = self
            .scores
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ");

        let text = vec![
            Line::from(Span::styled(tier.title(), score_style)).centered(),
            Line::from(format!("[{tier}]")).centered(),
            Line::default(),
            Line::from(vec![
                Span::raw("Average score: "),
                Span::styled(format!("{average}/100"), score_style),
            ])
            .centered(),
            Line::from(Span::styled(
                format!("Total {total} over {rounds} rounds: {round_scores}"),
                style::DIM,
            ))
            .centered(),
            Line::default(),
            Line::from(tier.message()).centered(),
            Line::default(),
            Line::from(Span::styled("Press any key to return to the menu", style::DIM)).centered(),
        ];

        let [area] = Layout::vertical([Constraint::Length(14)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [area] = Layout::horizontal([Constraint::Max(80)])
            .flex(Flex::Center)
            .areas(area);
        let block = Block::bordered().title(
            Line::from(Span::styled(
                format!(" {} complete ", self.kind.title()),
                style::TITLE,
            ))
            .centered(),
        );
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
            area,
        );
    }
}
