use crossterm::event::{Event, KeyCode};
use drill_engine::{ControlHandle, CubicBezier, Drill as _, Point, ShapeDrill, catalog::ShapeLevel};
use drill_evaluator::curve_scorer::CurveScorer;
use ratatui::{
    Frame,
    style::Color,
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Block,
        canvas::{Canvas, Context, Line, Points, Rectangle},
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
    (&["Tab"], "Switch handle"),
    (&["←", "↑", "→", "↓"], "Move (Shift ×5)"),
    (&["Enter"], "Submit/Next"),
    (&["r"], "Retry"),
    (&["Esc", "q"], "Menu"),
];

/// Canvas pixels per arrow key press.
const STEP: f64 = 5.0;
const CURVE_SEGMENTS: usize = 80;
const HANDLE_SIZE: f64 = 10.0;

#[derive(Debug)]
pub struct ShapeScreen {
    drill: ShapeDrill,
    scorer: CurveScorer,
}

impl ShapeScreen {
    /// Returns `None` for an empty level list.
    pub fn new(levels: Vec<ShapeLevel>) -> Option<Self> {
        Some(Self {
            drill: ShapeDrill::new(levels)?,
            scorer: CurveScorer::default(),
        })
    }

    fn paint(&self, ctx: &mut Context<'_>) {
        let target = self.drill.target();
        let curve = self.drill.curve();
        let revealed = !self.drill.is_editable();

        // dotted target
        let target_points = target
            .sample(CURVE_SEGMENTS)
            .step_by(2)
            .map(to_canvas)
            .collect::<Vec<_>>();
        ctx.draw(&Points {
            coords: &target_points,
            color: style::TARGET,
        });

        draw_polyline(ctx, &curve, style::ATTEMPT);
        ctx.layer();

        for (anchor, handle) in [
            (curve.p0, ControlHandle::First),
            (curve.p3, ControlHandle::Second),
        ] {
            let control = curve.controls().get(handle);
            let (x1, y1) = to_canvas(anchor);
            let (x2, y2) = to_canvas(control);
            ctx.draw(&Line::new(x1, y1, x2, y2, style::GUIDE));

            let color = if handle == self.drill.selected_handle() {
                style::HANDLE
            } else {
                Color::White
            };
            draw_handle(ctx, control, color);
            ctx.print(x2 + HANDLE_SIZE, y2, TextLine::from(handle.to_string()));
        }
        ctx.draw(&Points {
            coords: &[to_canvas(curve.p0), to_canvas(curve.p3)],
            color: Color::White,
        });

        if revealed {
            let controls = target.controls();
            draw_handle(ctx, controls.p1, style::TARGET);
            draw_handle(ctx, controls.p2, style::TARGET);
        }
    }
}

impl Screen for ShapeScreen {
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
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.drill.toggle_handle(),
            KeyCode::Left => self.drill.step_selected(-step, 0.0),
            KeyCode::Right => self.drill.step_selected(step, 0.0),
            KeyCode::Up => self.drill.step_selected(0.0, -step),
            KeyCode::Down => self.drill.step_selected(0.0, step),
            KeyCode::Char('r') => {
                if let Err(err) = self.drill.retry() {
                    tracing::debug!(%err, "nothing to retry");
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
            &level.name,
            round_progress(session, "Level"),
            &level.instruction,
        );
        let body = draw_drill_frame(frame, header, session, KEY_BINDINGS);

        let canvas = Canvas::default()
            .block(Block::bordered().title(" dotted: target | solid: yours "))
            .marker(Marker::Braille)
            .x_bounds([0.0, ShapeLevel::CANVAS.width])
            .y_bounds([0.0, ShapeLevel::CANVAS.height])
            .paint(|ctx| self.paint(ctx));
        frame.render_widget(canvas, body);
    }
}

/// Canvas y grows upwards; level coordinates grow downwards.
fn to_canvas(point: Point) -> (f64, f64) {
    (point.x, ShapeLevel::CANVAS.height - point.y)
}

fn draw_polyline(ctx: &mut Context<'_>, curve: &CubicBezier, color: Color) {
    let points = curve.sample(CURVE_SEGMENTS).map(to_canvas).collect::<Vec<_>>();
    for pair in points.windows(2) {
        let [(x1, y1), (x2, y2)] = [pair[0], pair[1]];
        ctx.draw(&Line::new(x1, y1, x2, y2, color));
    }
}

fn draw_handle(ctx: &mut Context<'_>, point: Point, color: Color) {
    let (x, y) = to_canvas(point);
    ctx.draw(&Rectangle {
        x: x - HANDLE_SIZE / 2.0,
        y: y - HANDLE_SIZE / 2.0,
        width: HANDLE_SIZE,
        height: HANDLE_SIZE,
        color,
    });
}

#[cfg(test)]
mod tests {
    use drill_engine::{SessionState, catalog::Catalog};

    use super::*;
    use crate::command::play::screens::test_util::{key, render, shift};

    fn screen() -> ShapeScreen {
        ShapeScreen::new(Catalog::builtin().shape).unwrap()
    }

    #[test]
    fn test_arrows_move_selected_handle() {
        let mut screen = screen();
        let start = *screen.drill.controls();

        screen.handle_event(&key(KeyCode::Up));
        assert_eq!(screen.drill.controls().p1, start.p1.offset(0.0, -5.0));

        screen.handle_event(&key(KeyCode::Tab));
        screen.handle_event(&shift(KeyCode::Right));
        assert_eq!(screen.drill.controls().p2, start.p2.offset(25.0, 0.0));
    }

    #[test]
    fn test_retry_after_submit() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Down));
        screen.handle_event(&key(KeyCode::Enter));
        assert_eq!(screen.drill.session().state(), SessionState::RoundResult);

        screen.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(screen.drill.session().state(), SessionState::Playing);
        assert_eq!(screen.drill.session().total(), 0);
        assert_eq!(screen.drill.level().id, 1);
    }

    #[test]
    fn test_retry_while_playing_is_ignored() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Down));
        let moved = *screen.drill.controls();
        screen.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(*screen.drill.controls(), moved);
    }

    #[test]
    fn test_draws_level_header() {
        let text = render(&screen());
        assert!(text.contains("Basic Arch"));
        assert!(text.contains("Level 1/5"));
        assert!(text.contains("P1"));
    }
}
