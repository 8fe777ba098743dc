use std::iter;

use crossterm::event::{Event, KeyCode};
use drill_engine::{Drill as _, DrillSeed, KerningAttempt, KerningDrill, catalog::KerningLevel};
use drill_evaluator::kerning_scorer::KerningScorer;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use ratatui_runtime::{Screen, ScreenTransition};

use crate::{
    command::play::screens::{
        digit_index, draw_drill_frame, handle_round_key, log_if_abandoned, round_progress,
        step_multiplier,
    },
    ui::widgets::{DrillHeader, KeyBinding, style},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Select gap"),
    (&["↑", "↓"], "Widen/Narrow (Shift ×5)"),
    (&["Enter"], "Submit/Next"),
    (&["Esc", "q"], "Menu"),
];

/// Pixels of gap per terminal column in the word preview.
const PIXELS_PER_CELL: i32 = 10;

#[derive(Debug)]
pub struct KerningScreen {
    drill: KerningDrill,
    scorer: KerningScorer,
}

impl KerningScreen {
    /// Returns `None` for an empty level list.
    pub fn new(levels: Vec<KerningLevel>, seed: DrillSeed) -> Option<Self> {
        Some(Self {
            drill: KerningDrill::new(levels, seed)?,
            scorer: KerningScorer::default(),
        })
    }

    /// The word with each gap drawn as blank columns; the selected gap is highlighted.
    fn word_line(&self) -> Line<'static> {
        let gaps = self.drill.gaps();
        let letter_style = Style::new().add_modifier(Modifier::BOLD);
        let mut spans = vec![];
        for (i, letter) in self.drill.level().letters().enumerate() {
            spans.push(Span::styled(letter.to_string(), letter_style));
            if let Some(&gap) = gaps.gaps().get(i) {
                let gap_style = if i == gaps.selected_index() {
                    Style::new().bg(style::HANDLE)
                } else {
                    Style::new().bg(style::GUIDE)
                };
                spans.push(Span::styled(" ".repeat(gap_cells(gap)), gap_style));
            }
        }
        Line::from(spans).centered()
    }

    fn gap_lines(&self) -> Vec<Line<'static>> {
        let level = self.drill.level();
        let gaps = self.drill.gaps();
        let letters = level.letters().collect::<Vec<_>>();
        let revealed = !self.drill.is_editable();
        iter::zip(letters.windows(2), gaps.gaps())
            .enumerate()
            .map(|(i, (pair, gap))| {
                let marker = if i == gaps.selected_index() { "▶ " } else { "  " };
                let mut spans = vec![
                    Span::styled(marker, style::SELECTED),
                    Span::raw(format!("{}–{}  {gap:>4}px", pair[0], pair[1])),
                ];
                if revealed {
                    spans.push(Span::styled(
                        format!("   ideal {:>4}px", level.ideal_gaps[i]),
                        Style::new().fg(style::TARGET),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Screen for KerningScreen {
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
        let step = step_multiplier(&key, 5);
        match key.code {
            KeyCode::Left => self.drill.select_prev_gap(),
            KeyCode::Right => self.drill.select_next_gap(),
            KeyCode::Up => self.drill.step_selected_gap(step),
            KeyCode::Down => self.drill.step_selected_gap(-step),
            KeyCode::Char(c @ '1'..='9') => {
                let index = digit_index(c);
                if let Err(err) = self.drill.select_gap(index) {
                    tracing::debug!(%err, "gap not selected");
                }
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let session = self.drill.session();
        let level = self.drill.level();
        let header = DrillHeader::new(
            &level.word,
            round_progress(session, "Level"),
            &level.instruction,
        );
        let body = draw_drill_frame(frame, header, session, KEY_BINDINGS);

        let [word_area, gaps_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas(body);
        let word_block = Block::bordered().title(format!(" {} ", level.font_family));
        frame.render_widget(
            Paragraph::new(vec![Line::default(), self.word_line()]).block(word_block),
            word_area,
        );

        let [gaps_area] = Layout::horizontal([Constraint::Length(40)])
            .flex(Flex::Center)
            .areas(gaps_area);
        frame.render_widget(
            Paragraph::new(self.gap_lines()).block(Block::bordered().title(" Gaps ")),
            gaps_area,
        );
    }
}

/// Maps the `-30..=60` px gap range onto `0..=9` columns.
fn gap_cells(gap: i32) -> usize {
    let min = *KerningAttempt::GAP_RANGE.start();
    usize::try_from((gap - min) / PIXELS_PER_CELL).unwrap_or(0)
}
