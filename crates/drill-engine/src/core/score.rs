use serde::{Deserialize, Serialize};

/// Fidelity score of a single round, an integer in `0..=100`.
///
/// Construct from a raw fidelity value with [`RoundScore::from_fidelity`], which
/// rounds half away from zero and saturates at both ends.
///
/// ```
/// use drill_engine::RoundScore;
///
/// assert_eq!(RoundScore::from_fidelity(54.5).value(), 55);
/// assert_eq!(RoundScore::from_fidelity(-12.0), RoundScore::MIN);
/// assert_eq!(RoundScore::from_fidelity(100.0), RoundScore::MAX);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct RoundScore(u8);

impl RoundScore {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Rounds and clamps a raw fidelity value into a score.
    ///
    /// `NaN` maps to [`RoundScore::MIN`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_fidelity(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// Returns `None` if `value` is above 100.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 { Some(Self(value)) } else { None }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<RoundScore> for u8 {
    fn from(score: RoundScore) -> Self {
        score.0
    }
}

impl TryFrom<u8> for RoundScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score {value} is above 100"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_up_for_positive_values() {
        assert_eq!(RoundScore::from_fidelity(74.5).value(), 75);
        assert_eq!(RoundScore::from_fidelity(74.49).value(), 74);
    }

    #[test]
    fn test_saturates_out_of_range_values() {
        assert_eq!(RoundScore::from_fidelity(-0.4), RoundScore::MIN);
        assert_eq!(RoundScore::from_fidelity(250.0), RoundScore::MAX);
        assert_eq!(RoundScore::from_fidelity(f64::NAN), RoundScore::MIN);
    }

    #[test]
    fn test_new_rejects_values_above_100() {
        assert_eq!(RoundScore::new(100), Some(RoundScore::MAX));
        assert_eq!(RoundScore::new(101), None);
    }
}
