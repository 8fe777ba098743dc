pub use self::{drill_header::*, key_help::*, round_banner::*, swatch::*};

mod drill_header;
mod key_help;
mod round_banner;
mod swatch;

pub mod style {
    use drill_engine::{ColorSample, RoundScore};
    use ratatui::style::{Color, Modifier, Style};

    pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
    pub const DIM: Style = Style::new().fg(Color::DarkGray);
    pub const SELECTED: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    pub const TARGET: Color = Color::Green;
    pub const ATTEMPT: Color = Color::Cyan;
    pub const HANDLE: Color = Color::Yellow;
    pub const GUIDE: Color = Color::DarkGray;

    /// Green for expert scores down to red for rookie ones.
    pub fn score_color(score: RoundScore) -> Color {
        match score.value() {
            90.. => Color::Green,
            75..90 => Color::Cyan,
            50..75 => Color::Yellow,
            _ => Color::Red,
        }
    }

    pub fn swatch_color(color: &ColorSample) -> Color {
        let [r, g, b] = color.to_rgb();
        Color::Rgb(r, g, b)
    }
}
