use crate::{RoundScore, Session, SessionError, SessionState};

/// The four game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum DrillKind {
    #[display("color")]
    Color,
    #[display("shape")]
    Shape,
    #[display("type")]
    Type,
    #[display("layout")]
    Layout,
}

impl DrillKind {
    pub const ALL: [Self; 4] = [Self::Color, Self::Shape, Self::Type, Self::Layout];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Color => "Color Match",
            Self::Shape => "Bézier Shaper",
            Self::Type => "Kerning",
            Self::Layout => "Layout",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Color => "Train your eye to read hue, saturation and lightness precisely.",
            Self::Shape => "Master Bézier curves: bend the line into the target shape.",
            Self::Type => "Learn kerning: space the letters so the word reads evenly.",
            Self::Layout => "Practice placement: balance elements in the available space.",
        }
    }
}

/// A game mode's owned state: a target, the player's attempt, and a score record.
///
/// Scorers read [`Drill::target`] and [`Drill::attempt`], compute a [`RoundScore`],
/// and hand it back through [`Drill::submit`].
pub trait Drill {
    /// What the player is trying to reproduce.
    type Target: ?Sized;
    /// The player's current configuration.
    type Attempt: ?Sized;

    fn kind(&self) -> DrillKind;

    fn target(&self) -> &Self::Target;

    fn attempt(&self) -> &Self::Attempt;

    fn session(&self) -> &Session;

    /// Records the score of the current attempt.
    fn submit(&mut self, score: RoundScore) -> Result<SessionState, SessionError>;

    /// Leaves a round result and sets up the next round.
    fn next_round(&mut self) -> Result<(), SessionError>;

    /// Whether the attempt can still be edited.
    fn is_editable(&self) -> bool {
        self.session().state().is_playing()
    }
}
