//! Bézier shaping score.
//!
//! Only the two control points are compared. The anchors are shared between the
//! target and the attempt, so they carry no information.
//!
//! ```text
//! point_score = max(0, 100 - distance / max_distance * 100)
//! fidelity    = (point_score(p1) + point_score(p2)) / 2
//! ```

use drill_engine::{ControlPoints, CubicBezier};

use crate::fidelity_scorer::{FidelityScorer, linear_falloff};

#[derive(Debug, Clone, Copy)]
pub struct CurveScorer {
    max_distance: f64,
}

impl Default for CurveScorer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DISTANCE)
    }
}

impl CurveScorer {
    /// Control point distance, in canvas pixels, at which a point scores 0.
    pub const DEFAULT_MAX_DISTANCE: f64 = 200.0;

    /// # Panics
    ///
    /// Panics if `max_distance` is not positive.
    #[must_use]
    pub fn new(max_distance: f64) -> Self {
        assert!(max_distance > 0.0);
        Self { max_distance }
    }

    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl FidelityScorer for CurveScorer {
    type Target = CubicBezier;
    type Attempt = ControlPoints;

    fn fidelity(&self, target: &CubicBezier, attempt: &ControlPoints) -> f64 {
        let target = target.controls();
        let first = linear_falloff(target.p1.distance(attempt.p1), self.max_distance);
        let second = linear_falloff(target.p2.distance(attempt.p2), self.max_distance);
        f64::midpoint(first, second)
    }
}

#[cfg(test)]
mod tests {
    use drill_engine::{Point, catalog::Catalog};

    use super::*;

    fn arch() -> CubicBezier {
        Catalog::builtin().shape[0].curve
    }

    #[test]
    fn test_matching_controls_score_100() {
        for level in Catalog::builtin().shape {
            let score = CurveScorer::default().score(&level.curve, &level.curve.controls());
            assert_eq!(score.value(), 100);
        }
    }

    #[test]
    fn test_point_at_max_distance_scores_zero() {
        let target = arch();
        let mut attempt = target.controls();
        attempt.p1 = attempt.p1.offset(0.0, 200.0);
        assert_eq!(CurveScorer::default().score(&target, &attempt).value(), 50);

        attempt.p1 = attempt.p1.offset(0.0, 150.0);
        assert_eq!(CurveScorer::default().score(&target, &attempt).value(), 50);
    }

    #[test]
    fn test_anchors_are_ignored() {
        let target = arch();
        let other = CubicBezier::new(
            Point::new(0.0, 0.0),
            target.p1,
            target.p2,
            Point::new(600.0, 400.0),
        );
        assert_eq!(CurveScorer::default().score(&other, &target.controls()).value(), 100);
    }

    #[test]
    fn test_diagonal_distance() {
        let target = arch();
        let mut attempt = target.controls();
        // 3-4-5 triangle: 100px off, half of max distance
        attempt.p2 = attempt.p2.offset(60.0, 80.0);
        assert_eq!(CurveScorer::default().score(&target, &attempt).value(), 75);
    }

    #[test]
    fn test_linear_start_scores_below_perfect() {
        let target = arch();
        let score = CurveScorer::default().score(&target, &target.linear_controls());
        assert!(score.value() < 100);
    }
}
