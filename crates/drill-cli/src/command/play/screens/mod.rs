use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use drill_engine::{Drill, Session};
use drill_evaluator::fidelity_scorer::{FidelityScorer, score_and_submit};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use ratatui_runtime::ScreenTransition;

use crate::ui::widgets::{DrillHeader, KeyBinding, KeyHelp, RoundBanner};

pub use self::{
    color::ColorScreen, kerning::KerningScreen, layout::LayoutScreen, menu::MenuScreen,
    shape::ShapeScreen, summary::SummaryScreen,
};

mod color;
mod kerning;
mod layout;
mod menu;
mod shape;
mod summary;

/// Handles the keys every drill screen shares: submit, advance, leave.
///
/// Returns `None` for keys the drill screen handles itself.
fn handle_round_key<D, S>(drill: &mut D, scorer: &S, key: &KeyEvent) -> Option<ScreenTransition>
where
    D: Drill,
    S: FidelityScorer<Target = D::Target, Attempt = D::Attempt>,
{
    let state = drill.session().state();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(ScreenTransition::Pop),
        KeyCode::Enter if state.is_playing() => {
            if let Err(err) = score_and_submit(drill, scorer) {
                tracing::warn!(%err, "submission rejected");
            }
            Some(ScreenTransition::Stay)
        }
        KeyCode::Enter | KeyCode::Char('n') if state.is_round_result() => {
            if let Err(err) = drill.next_round() {
                tracing::warn!(%err, "could not advance");
            }
            Some(ScreenTransition::Stay)
        }
        KeyCode::Enter if state.is_final_result() => {
            let summary = SummaryScreen::from_session(drill.session())?;
            Some(ScreenTransition::Replace(Box::new(summary)))
        }
        _ => None,
    }
}

/// `fast` with Shift held, `1` otherwise.
fn step_multiplier(key: &KeyEvent, fast: i32) -> i32 {
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        fast
    } else {
        1
    }
}

/// Zero-based index for the digit keys `1` to `9`.
fn digit_index(c: char) -> usize {
    c.to_digit(10)
        .and_then(|digit| usize::try_from(digit).ok())
        .map_or(0, |digit| digit.saturating_sub(1))
}

fn log_if_abandoned(session: &Session) {
    if !session.state().is_final_result() {
        tracing::info!(
            drill = %session.kind(),
            round = session.round(),
            of = session.round_count(),
            total = session.total(),
            "session abandoned"
        );
    }
}

/// Splits the frame into header, body, result banner and key help, and draws
/// everything but the body.
fn draw_drill_frame(
    frame: &mut Frame,
    header: DrillHeader<'_>,
    session: &Session,
    bindings: &[KeyBinding<'_>],
) -> Rect {
    let [header_area, body_area, banner_area, help_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    frame.render_widget(header, header_area);
    frame.render_widget(RoundBanner::new(session), banner_area);
    frame.render_widget(KeyHelp::new(bindings), help_area);
    body_area
}

fn round_progress(session: &Session, noun: &str) -> String {
    format!("{noun} {}/{}", session.round(), session.round_count())
}
