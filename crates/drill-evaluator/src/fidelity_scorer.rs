//! The scorer trait shared by every game mode.

use std::fmt;

use drill_engine::{Drill, RoundScore, SessionError};

/// Compares a player's attempt against a target configuration.
pub trait FidelityScorer: fmt::Debug {
    type Target: ?Sized;
    type Attempt: ?Sized;

    /// Unrounded fidelity, nominally in `0.0..=100.0`.
    fn fidelity(&self, target: &Self::Target, attempt: &Self::Attempt) -> f64;

    /// Fidelity rounded half-up and clamped to a [`RoundScore`].
    fn score(&self, target: &Self::Target, attempt: &Self::Attempt) -> RoundScore {
        RoundScore::from_fidelity(self.fidelity(target, attempt))
    }
}

/// Scores the drill's current attempt and records it in the drill's session.
///
/// Fails without scoring if the session does not accept a submission.
pub fn score_and_submit<D, S>(drill: &mut D, scorer: &S) -> Result<RoundScore, SessionError>
where
    D: Drill + ?Sized,
    S: FidelityScorer<Target = D::Target, Attempt = D::Attempt> + ?Sized,
{
    if !drill.is_editable() {
        return Err(if drill.session().state().is_final_result() {
            SessionError::Finished
        } else {
            SessionError::RoundResultPending
        });
    }
    let score = scorer.score(drill.target(), drill.attempt());
    drill.submit(score)?;
    Ok(score)
}

/// `max(0, 100 - 100 * distance / max_distance)`.
pub(crate) fn linear_falloff(distance: f64, max_distance: f64) -> f64 {
    (100.0 - distance / max_distance * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use drill_engine::{ColorChannel, ColorDrill, DrillSeed, SessionState};

    use crate::color_scorer::ColorScorer;

    use super::*;

    #[test]
    fn test_linear_falloff() {
        assert!((linear_falloff(0.0, 200.0) - 100.0).abs() < f64::EPSILON);
        assert!((linear_falloff(100.0, 200.0) - 50.0).abs() < f64::EPSILON);
        assert!(linear_falloff(500.0, 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_submit_records_scored_attempt() {
        let mut drill = ColorDrill::new(NonZeroUsize::new(2).unwrap(), DrillSeed::from(9));
        let expected = ColorScorer.score(drill.target(), drill.attempt());

        let score = score_and_submit(&mut drill, &ColorScorer).unwrap();
        assert_eq!(score, expected);
        assert_eq!(drill.session().state(), SessionState::RoundResult);
        assert_eq!(drill.session().total(), u32::from(score.value()));
    }

    #[test]
    fn test_rejects_second_submission() {
        let mut drill = ColorDrill::new(NonZeroUsize::new(1).unwrap(), DrillSeed::from(9));
        let target = *drill.target();
        for channel in ColorChannel::ALL {
            drill.set(channel, target.channel(channel));
        }
        assert_eq!(score_and_submit(&mut drill, &ColorScorer), Ok(RoundScore::MAX));
        assert_eq!(
            score_and_submit(&mut drill, &ColorScorer),
            Err(SessionError::Finished)
        );
        assert_eq!(drill.session().scores(), &[RoundScore::MAX]);
    }
}
