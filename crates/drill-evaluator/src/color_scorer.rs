//! Color matching score.
//!
//! ```text
//! hue_score   = max(0, 100 - hue_distance / 180 * 100)   (circular distance, 0..=180)
//! sat_score   = max(0, 100 - |Δs|)
//! light_score = max(0, 100 - |Δl|)
//! fidelity    = 0.5 * hue_score + 0.25 * sat_score + 0.25 * light_score
//! ```

use drill_engine::ColorSample;

use crate::fidelity_scorer::{FidelityScorer, linear_falloff};

/// Scores an HSL attempt against an HSL target; hue carries half the weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorScorer;

impl ColorScorer {
    pub const HUE_WEIGHT: f64 = 0.5;
    pub const SATURATION_WEIGHT: f64 = 0.25;
    pub const LIGHTNESS_WEIGHT: f64 = 0.25;
}

impl FidelityScorer for ColorScorer {
    type Target = ColorSample;
    type Attempt = ColorSample;

    fn fidelity(&self, target: &ColorSample, attempt: &ColorSample) -> f64 {
        let hue = linear_falloff(f64::from(target.hue_distance(attempt)), 180.0);
        let saturation = percent_score(target.saturation(), attempt.saturation());
        let lightness = percent_score(target.lightness(), attempt.lightness());
        hue * Self::HUE_WEIGHT
            + saturation * Self::SATURATION_WEIGHT
            + lightness * Self::LIGHTNESS_WEIGHT
    }
}

fn percent_score(target: u8, attempt: u8) -> f64 {
    (100.0 - f64::from(target.abs_diff(attempt))).max(0.0)
}

#[cfg(test)]
mod tests {
    use drill_engine::RoundScore;

    use super::*;

    fn score(target: (u16, u8, u8), attempt: (u16, u8, u8)) -> u8 {
        let target = ColorSample::new(target.0, target.1, target.2);
        let attempt = ColorSample::new(attempt.0, attempt.1, attempt.2);
        ColorScorer.score(&target, &attempt).value()
    }

    #[test]
    fn test_identical_colors_score_100() {
        for hue in (0..360).step_by(7) {
            for percent in [0, 20, 50, 79, 100] {
                let color = (hue, percent, 100 - percent);
                assert_eq!(score(color, color), 100);
            }
        }
    }

    #[test]
    fn test_hue_distance_wraps_around() {
        assert_eq!(score((359, 50, 50), (1, 50, 50)), score((0, 50, 50), (2, 50, 50)));
        assert_eq!(score((10, 50, 50), (350, 50, 50)), score((350, 50, 50), (10, 50, 50)));
    }

    #[test]
    fn test_opposite_hue_keeps_half() {
        assert_eq!(score((0, 50, 50), (180, 50, 50)), 50);
        assert_eq!(score((300, 40, 60), (120, 40, 60)), 50);
    }

    #[test]
    fn test_saturation_and_lightness_weights() {
        // 0.25 * (100 - 40) + 0.25 * (100 - 20) + 0.5 * 100
        assert_eq!(score((200, 70, 30), (200, 30, 50)), 85);
    }

    #[test]
    fn test_worst_case_is_zero() {
        let target = ColorSample::new(0, 0, 0);
        let attempt = ColorSample::new(180, 100, 100);
        assert_eq!(ColorScorer.score(&target, &attempt), RoundScore::MIN);
    }
}
