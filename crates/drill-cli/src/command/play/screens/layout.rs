use crossterm::event::{Event, KeyCode};
use drill_engine::{
    Drill as _, ElementKind, GridGuide, LayoutCanvas, LayoutDrill, Point, Size,
    catalog::LayoutLevel,
};
use drill_evaluator::layout_scorer::LayoutScorer;
use ratatui::{
    Frame,
    style::Color,
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Block,
        canvas::{Canvas, Context, Line, Rectangle},
    },
};
use ratatui_runtime::{Screen, ScreenTransition};

use crate::{
    command::play::screens::{
        draw_drill_frame, handle_round_key, log_if_abandoned, round_progress, step_multiplier,
    },
    ui::widgets::{DrillHeader, KeyBinding, style},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["Tab"], "Next element"),
    (&["←", "↑", "→", "↓"], "Move (Shift ×5)"),
    (&["Enter"], "Submit/Next"),
    (&["Esc", "q"], "Menu"),
];

/// Container pixels per arrow key press.
const STEP: f64 = 5.0;
const SIDE: f64 = LayoutCanvas::CONTAINER_SIDE;
/// Left and right margins of the column guide.
const COLUMN_MARGIN: f64 = 40.0;

#[derive(Debug)]
pub struct LayoutScreen {
    drill: LayoutDrill,
    scorer: LayoutScorer,
}

impl LayoutScreen {
    /// Returns `None` for an empty level list.
    pub fn new(levels: Vec<LayoutLevel>) -> Option<Self> {
        Some(Self {
            drill: LayoutDrill::new(levels)?,
            scorer: LayoutScorer,
        })
    }

    fn paint(&self, ctx: &mut Context<'_>) {
        draw_grid(ctx, self.drill.level().grid);
        ctx.layer();

        if !self.drill.is_editable() {
            for element in self.drill.target() {
                draw_rect(ctx, element.target, element.size, style::TARGET);
            }
            ctx.layer();
        }

        let targets = self.drill.target();
        for (i, placed) in self.drill.attempt().iter().enumerate() {
            let element = targets.iter().find(|element| element.id == placed.id);
            let color = if i == self.drill.selected_index() {
                style::HANDLE
            } else {
                element.map_or(Color::White, |element| kind_color(element.kind))
            };
            draw_rect(ctx, placed.position, placed.size, color);

            let label = element
                .and_then(|element| element.label.clone())
                .unwrap_or_else(|| format!("#{}", placed.id));
            let (x, y) = to_canvas(placed.position, placed.size);
            ctx.print(
                x + 4.0,
                y + placed.size.height / 2.0,
                TextLine::styled(label, color),
            );
        }
    }
}

impl Screen for LayoutScreen {
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
        let step = STEP * f64::from(step_multiplier(&key, 5));
        let moved = match key.code {
            KeyCode::Tab => {
                self.drill.select_next();
                None
            }
            KeyCode::Left => self.drill.nudge_selected(-step, 0.0),
            KeyCode::Right => self.drill.nudge_selected(step, 0.0),
            KeyCode::Up => self.drill.nudge_selected(0.0, -step),
            KeyCode::Down => self.drill.nudge_selected(0.0, step),
            _ => None,
        };
        if let Some(position) = moved {
            tracing::trace!(x = position.x, y = position.y, "element moved");
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let session = self.drill.session();
        let level = self.drill.level();
        let header = DrillHeader::new(
            &level.name,
            round_progress(session, "Level"),
            &level.instruction,
        );
        let body = draw_drill_frame(frame, header, session, KEY_BINDINGS);

        let title = if self.drill.is_editable() {
            format!(" grid: {} ", level.grid)
        } else {
            format!(" grid: {} | green: ideal placement ", level.grid)
        };
        let canvas = Canvas::default()
            .block(Block::bordered().title(title))
            .marker(Marker::Braille)
            .x_bounds([0.0, SIDE])
            .y_bounds([0.0, SIDE])
            .paint(|ctx| self.paint(ctx));
        frame.render_widget(canvas, body);
    }
}

/// Canvas y grows upwards; container coordinates grow downwards from the top-left corner.
fn to_canvas(position: Point, size: Size) -> (f64, f64) {
    (position.x, SIDE - (position.y + size.height))
}

fn draw_rect(ctx: &mut Context<'_>, position: Point, size: Size, color: Color) {
    let (x, y) = to_canvas(position, size);
    ctx.draw(&Rectangle {
        x,
        y,
        width: size.width,
        height: size.height,
        color,
    });
}

fn draw_grid(ctx: &mut Context<'_>, grid: GridGuide) {
    let mut vertical = |x: f64| ctx.draw(&Line::new(x, 0.0, x, SIDE, style::GUIDE));
    match grid {
        GridGuide::Center => vertical(SIDE / 2.0),
        GridGuide::Thirds => {
            vertical(SIDE / 3.0);
            vertical(SIDE * 2.0 / 3.0);
        }
        GridGuide::Columns => {
            vertical(COLUMN_MARGIN);
            vertical(SIDE - COLUMN_MARGIN);
        }
        GridGuide::None => {}
    }
    let mut horizontal = |y: f64| ctx.draw(&Line::new(0.0, y, SIDE, y, style::GUIDE));
    match grid {
        GridGuide::Center => horizontal(SIDE / 2.0),
        GridGuide::Thirds => {
            horizontal(SIDE / 3.0);
            horizontal(SIDE * 2.0 / 3.0);
        }
        GridGuide::Columns | GridGuide::None => {}
    }
}

fn kind_color(kind: ElementKind) -> Color {
    match kind {
        ElementKind::Box => Color::White,
        ElementKind::Text => Color::LightBlue,
        ElementKind::Image => Color::LightMagenta,
    }
}

#[cfg(test)]
mod tests {
    use drill_engine::{SessionState, catalog::Catalog};

    use super::*;
    use crate::command::play::screens::test_util::{key, render, shift};

    fn screen() -> LayoutScreen {
        LayoutScreen::new(Catalog::builtin().layout).unwrap()
    }

    #[test]
    fn test_arrows_nudge_selected_element() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Right));
        screen.handle_event(&shift(KeyCode::Down));
        assert_eq!(screen.drill.attempt()[0].position, Point::new(25.0, 45.0));

        screen.handle_event(&shift(KeyCode::Up));
        screen.handle_event(&shift(KeyCode::Up));
        assert_eq!(screen.drill.attempt()[0].position, Point::new(25.0, 0.0));
    }

    #[test]
    fn test_nudges_ignored_after_submit() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Enter));
        assert_eq!(screen.drill.session().state(), SessionState::RoundResult);

        screen.handle_event(&key(KeyCode::Left));
        assert_eq!(screen.drill.attempt()[0].position, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_tab_cycles_through_elements() {
        let mut screen = screen();
        for _ in 0..2 {
            screen.handle_event(&key(KeyCode::Enter));
            screen.handle_event(&key(KeyCode::Enter));
        }
        assert_eq!(screen.drill.level().id, 3);

        screen.handle_event(&key(KeyCode::Tab));
        assert_eq!(screen.drill.selected_index(), 1);
        screen.handle_event(&key(KeyCode::Tab));
        assert_eq!(screen.drill.selected_index(), 0);
    }

    #[test]
    fn test_draws_level_and_grid() {
        let mut screen = screen();
        let text = render(&screen);
        assert!(text.contains("Visual Center"));
        assert!(text.contains("grid: center"));
        assert!(!text.contains("ideal placement"));

        screen.handle_event(&key(KeyCode::Enter));
        assert!(render(&screen).contains("ideal placement"));
    }
}
