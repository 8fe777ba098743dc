use std::num::NonZeroUsize;

use crossterm::event::{Event, KeyCode};
use drill_engine::{DrillKind, DrillSeed, catalog::Catalog};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};
use ratatui_runtime::{Screen, ScreenTransition};

use crate::{
    command::play::screens::{ColorScreen, KerningScreen, LayoutScreen, ShapeScreen, digit_index},
    ui::widgets::{KeyBinding, KeyHelp, style},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["↑", "↓"], "Select"),
    (&["Enter", "1-4"], "Start"),
    (&["Esc", "q"], "Quit"),
];

/// Drill selection. Every launched drill gets a fresh seed drawn from the session seed.
#[derive(Debug)]
pub struct MenuScreen {
    catalog: Catalog,
    color_rounds: NonZeroUsize,
    rng: Pcg32,
    selected: usize,
}

impl MenuScreen {
    pub fn new(catalog: Catalog, color_rounds: NonZeroUsize, seed: DrillSeed) -> Self {
        Self {
            catalog,
            color_rounds,
            rng: Pcg32::seed_from_u64(seed.value()),
            selected: 0,
        }
    }

    fn selected_kind(&self) -> DrillKind {
        DrillKind::ALL[self.selected]
    }

    fn launch(&mut self, kind: DrillKind) -> ScreenTransition {
        let seed = self.rng.random::<DrillSeed>();
        tracing::info!(drill = %kind, %seed, "drill started");
        let screen: Option<Box<dyn Screen>> = match kind {
            DrillKind::Color => Some(Box::new(ColorScreen::new(self.color_rounds, seed))),
            DrillKind::Shape => ShapeScreen::new(self.catalog.shape.clone())
                .map(|screen| Box::new(screen) as Box<dyn Screen>),
            DrillKind::Type => KerningScreen::new(self.catalog.kerning.clone(), seed)
                .map(|screen| Box::new(screen) as Box<dyn Screen>),
            DrillKind::Layout => LayoutScreen::new(self.catalog.layout.clone())
                .map(|screen| Box::new(screen) as Box<dyn Screen>),
        };
        match screen {
            Some(screen) => ScreenTransition::Push(screen),
            None => {
                tracing::warn!(drill = %kind, "catalog has no levels for this drill");
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for MenuScreen {
    fn on_active(&mut self) {
        tracing::debug!(selected = %self.selected_kind(), "menu shown");
    }

    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_event() else {
            return ScreenTransition::Stay;
        };
        let len = DrillKind::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::Exit,
            KeyCode::Up => self.selected = (self.selected + len - 1) % len,
            KeyCode::Down => self.selected = (self.selected + 1) % len,
            KeyCode::Enter => return self.launch(self.selected_kind()),
            KeyCode::Char(c @ '1'..='4') => {
                self.selected = digit_index(c);
                return self.launch(self.selected_kind());
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let [title_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let [list_area] = Layout::horizontal([Constraint::Max(72)])
            .flex(Flex::Center)
            .areas(list_area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("DESIGN DRILL", style::TITLE)).centered(),
                Line::from(Span::styled("Train your eye, one round at a time", style::DIM))
                    .centered(),
            ]),
            title_area,
        );

        let items = DrillKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                ListItem::new(vec![
                    Line::from(format!("{}. {}", i + 1, kind.title())),
                    Line::from(Span::styled(format!("   {}", kind.description()), style::DIM)),
                ])
            })
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(Block::bordered().title(" Drills "))
            .highlight_style(
                Style::default()
                    .fg(style::HANDLE)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, list_area, &mut list_state);

        frame.render_widget(KeyHelp::new(KEY_BINDINGS), help_area);
    }
}

#[cfg(test)]
mod tests {
    use drill_engine::catalog::Catalog;

    use super::*;
    use crate::command::play::screens::test_util::{key, render};

    fn menu(catalog: Catalog) -> MenuScreen {
        MenuScreen::new(catalog, NonZeroUsize::new(3).unwrap(), DrillSeed::from(1))
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = menu(Catalog::builtin());
        menu.handle_event(&key(KeyCode::Up));
        assert_eq!(menu.selected_kind(), DrillKind::Layout);
        menu.handle_event(&key(KeyCode::Down));
        assert_eq!(menu.selected_kind(), DrillKind::Color);
    }

    #[test]
    fn test_enter_and_digits_push_drills() {
        let mut menu = menu(Catalog::builtin());
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Enter)),
            ScreenTransition::Push(_)
        ));
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Char('3'))),
            ScreenTransition::Push(_)
        ));
        assert_eq!(menu.selected_kind(), DrillKind::Type);
    }

    #[test]
    fn test_empty_level_list_stays_on_menu() {
        let catalog = Catalog {
            shape: vec![],
            ..Catalog::builtin()
        };
        let mut menu = menu(catalog);
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Char('2'))),
            ScreenTransition::Stay
        ));
    }

    #[test]
    fn test_quit_exits() {
        let mut menu = menu(Catalog::builtin());
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Char('q'))),
            ScreenTransition::Exit
        ));
    }

    #[test]
    fn test_draws_all_drills() {
        let text = render(&menu(Catalog::builtin()));
        for kind in DrillKind::ALL {
            assert!(text.contains(kind.title()), "{kind} missing");
        }
    }
}
