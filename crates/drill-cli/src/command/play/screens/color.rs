use std::num::NonZeroUsize;

use crossterm::event::{Event, KeyCode};
use drill_engine::{ColorChannel, ColorDrill, Drill as _, DrillKind, DrillSeed};
use drill_evaluator::color_scorer::ColorScorer;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, LineGauge},
};
use ratatui_runtime::{Screen, ScreenTransition};

use crate::{
    command::play::screens::{
        draw_drill_frame, handle_round_key, log_if_abandoned, round_progress, step_multiplier,
    },
    ui::widgets::{DrillHeader, KeyBinding, Swatch, style},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["↑", "↓"], "Channel"),
    (&["←", "→"], "Adjust (Shift ×10)"),
    (&["Enter"], "Submit/Next"),
    (&["Esc", "q"], "Menu"),
];

#[derive(Debug)]
pub struct ColorScreen {
    drill: ColorDrill,
    scorer: ColorScorer,
    channel: ColorChannel,
}

impl ColorScreen {
    pub fn new(rounds: NonZeroUsize, seed: DrillSeed) -> Self {
        Self {
            drill: ColorDrill::new(rounds, seed),
            scorer: ColorScorer,
            channel: ColorChannel::Hue,
        }
    }

    fn draw_gauges(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(1); 3]).split(area);
        let current = self.drill.current();
        for (channel, row) in ColorChannel::ALL.into_iter().zip(rows.iter()) {
            let value = current.channel(channel);
            let unit = if channel.is_hue() { "°" } else { "%" };
            let label_style = if channel == self.channel {
                style::SELECTED
            } else {
                Style::new()
            };
            let gauge = LineGauge::default()
                .ratio(f64::from(value) / f64::from(channel.max()))
                .label(Span::styled(
                    format!("{:<10} {value:>3}{unit} ", channel.to_string()),
                    label_style,
                ))
                .filled_style(Style::new().fg(style::ATTEMPT));
            frame.render_widget(gauge, *row);
        }
    }
}

impl Screen for ColorScreen {
    fn on_close(&mut self) {
        log_if_abandoned(self.drill.session());
    }

    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_event() else {
            return ScreenTransition::Stay;
        };
        if let Some(transition) = handle_round_key(&mut self.drill, &self.scorer, &key) {
            return transition;
        }
        let step = step_multiplier(&key, 10);
        match key.code {
            KeyCode::Up => self.channel = self.channel.prev(),
            KeyCode::Down => self.channel = self.channel.next(),
            KeyCode::Left => self.drill.step(self.channel, -step),
            KeyCode::Right => self.drill.step(self.channel, step),
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let session = self.drill.session();
        let header = DrillHeader::new(
            DrillKind::Color.title(),
            round_progress(session, "Round"),
            "Match the target color by adjusting hue, saturation and lightness.",
        );
        let body = draw_drill_frame(frame, header, session, KEY_BINDINGS);

        let [swatch_area, gauge_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(5)]).areas(body);
        let [target_area, attempt_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(swatch_area);

        let revealed = !self.drill.is_editable();
        let (target_title, attempt_title) = if revealed {
            (
                format!("Target {}", self.drill.target()),
                format!("Yours {}", self.drill.current()),
            )
        } else {
            ("Target".to_owned(), "Yours".to_owned())
        };
        frame.render_widget(Swatch::new(self.drill.target(), target_title), target_area);
        frame.render_widget(Swatch::new(self.drill.current(), attempt_title), attempt_area);

        let gauge_block = Block::bordered();
        let inner = gauge_block.inner(gauge_area);
        frame.render_widget(gauge_block, gauge_area);
        self.draw_gauges(frame, inner);
    }
}
