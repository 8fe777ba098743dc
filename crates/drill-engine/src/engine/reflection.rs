use crate::RoundScore;

/// Qualitative grade band for a session's average score.
///
/// | Average   | Tier     |
/// |-----------|----------|
/// | 90 - 100  | `Expert` |
/// | 75 - 89   | `Pro`    |
/// | 50 - 74   | `Junior` |
/// | 0 - 49    | `Rookie` |
///
/// Lower bounds are inclusive.
///
/// ```
/// use drill_engine::{ReflectionTier, RoundScore};
///
/// let tier = ReflectionTier::from_average(RoundScore::new(75).unwrap());
/// assert_eq!(tier, ReflectionTier::Pro);
/// assert_eq!(tier.title(), "Skilled Designer");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum ReflectionTier {
    #[display("EXPERT")]
    Expert,
    #[display("PRO")]
    Pro,
    #[display("JUNIOR")]
    Junior,
    #[display("ROOKIE")]
    Rookie,
}

impl ReflectionTier {
    /// Tiers with their inclusive lower bounds, highest first.
    const THRESHOLDS: [(u8, Self); 3] = [(90, Self::Expert), (75, Self::Pro), (50, Self::Junior)];

    #[must_use]
    pub fn from_average(average: RoundScore) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| average.value() >= *min)
            .map_or(Self::Rookie, |(_, tier)| *tier)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Expert => "True Design Master",
            Self::Pro => "Skilled Designer",
            Self::Junior => "Needs More Flight Hours",
            Self::Rookie => "Much Left to Learn",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Expert => {
                "Outstanding! Your eye and design instincts are razor sharp. \
                 You are ready for professional work."
            }
            Self::Pro => {
                "Great results. A little more practice and you will reach perfection. \
                 Keep sharpening your skills!"
            }
            Self::Junior => {
                "A solid foundation, but you need to be more precise. \
                 Practice spotting the small details."
            }
            Self::Rookie => {
                "Don't give up! Design sensitivity is trained through repetition. Try again!"
            }
        }
    }
}
