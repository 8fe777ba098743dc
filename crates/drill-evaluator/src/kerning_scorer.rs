//! Kerning score.
//!
//! ```text
//! average_error = Σ |attempt[i] - target[i]| / N
//! fidelity      = max(0, 100 - average_error * sensitivity)
//! ```
//!
//! With the default sensitivity of 3 an average error of about 33px per gap
//! scores 0.

use std::iter;

use drill_engine::RoundScore;

use crate::fidelity_scorer::FidelityScorer;

#[derive(Debug, Clone, Copy)]
pub struct KerningScorer {
    sensitivity: f64,
}

impl Default for KerningScorer {
    fn default() -> Self {
        Self {
            sensitivity: Self::DEFAULT_SENSITIVITY,
        }
    }
}

impl KerningScorer {
    /// Points lost per pixel of average gap error.
    pub const DEFAULT_SENSITIVITY: f64 = 3.0;

    #[must_use]
    pub fn with_sensitivity(sensitivity: f64) -> Self {
        Self { sensitivity }
    }
}

impl FidelityScorer for KerningScorer {
    type Target = [i32];
    type Attempt = [i32];

    /// # Panics
    ///
    /// Panics if the attempt and the target have different gap counts.
    #[expect(clippy::cast_precision_loss)]
    fn fidelity(&self, target: &[i32], attempt: &[i32]) -> f64 {
        assert_eq!(
            target.len(),
            attempt.len(),
            "kerning attempt must have one gap per target gap"
        );
        if target.is_empty() {
            return f64::from(RoundScore::MAX.value());
        }
        let total_error: u64 = iter::zip(target, attempt)
            .map(|(target, attempt)| u64::from(target.abs_diff(*attempt)))
            .sum();
        let average_error = total_error as f64 / target.len() as f64;
        (100.0 - average_error * self.sensitivity).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(target: &[i32], attempt: &[i32]) -> u8 {
        KerningScorer::default().score(target, attempt).value()
    }

    #[test]
    fn test_ideal_gaps_score_100() {
        assert_eq!(score(&[-15, -15], &[-15, -15]), 100);
        assert_eq!(score(&[-15, -10, -5, -10, -5], &[-15, -10, -5, -10, -5]), 100);
    }

    #[test]
    fn test_average_error_times_three() {
        assert_eq!(score(&[-15, -15], &[0, 0]), 55);
        // (4 + 1 + 0) / 3 * 3 = 5
        assert_eq!(score(&[-5, 2, 5], &[-1, 1, 5]), 95);
    }

    #[test]
    fn test_large_error_saturates_at_zero() {
        assert_eq!(score(&[-30, -30], &[60, 60]), 0);
    }

    #[test]
    fn test_every_gap_counts() {
        // a single perfect gap does not hide the error in the others
        assert_eq!(score(&[-8, -8, 2], &[-8, 12, 22]), 60);
    }

    #[test]
    fn test_sensitivity_is_configurable() {
        let scorer = KerningScorer::with_sensitivity(1.0);
        assert_eq!(scorer.score(&[-15, -15], &[0, 0]).value(), 85);
    }

    #[test]
    fn test_no_gaps_score_100() {
        assert_eq!(score(&[], &[]), 100);
    }

    #[test]
    #[should_panic(expected = "one gap per target gap")]
    fn test_gap_count_mismatch_panics() {
        let _ = score(&[-15, -15], &[0]);
    }
}
