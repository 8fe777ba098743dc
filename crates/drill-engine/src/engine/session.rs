use std::num::NonZeroUsize;

use crate::{DrillKind, ReflectionTier, RoundScore, SessionError};

/// Where a [`Session`] is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// The player is adjusting the current round's attempt.
    Playing,
    /// A round was scored and more rounds remain.
    RoundResult,
    /// The last round was scored; the session is over.
    FinalResult,
}

/// Running score record for one drill, over a fixed number of rounds.
///
/// ```
/// use drill_engine::{DrillKind, RoundScore, Session, ReflectionTier};
/// use std::num::NonZeroUsize;
///
/// let mut session = Session::new(DrillKind::Color, NonZeroUsize::new(2).unwrap());
/// session.submit_round(RoundScore::new(80).unwrap()).unwrap();
/// session.next_round().unwrap();
/// session.submit_round(RoundScore::new(71).unwrap()).unwrap();
///
/// let summary = session.summary().unwrap();
/// assert_eq!(summary.average.value(), 76); // round(151 / 2)
/// assert_eq!(summary.tier, ReflectionTier::Pro);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    kind: DrillKind,
    round_count: NonZeroUsize,
    scores: Vec<RoundScore>,
    total: u32,
    state: SessionState,
}

/// Final grade of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub average: RoundScore,
    pub tier: ReflectionTier,
    pub total: u32,
    pub rounds: usize,
}

impl Session {
    #[must_use]
    pub fn new(kind: DrillKind, round_count: NonZeroUsize) -> Self {
        Self {
            kind,
            round_count,
            scores: Vec::with_capacity(round_count.get()),
            total: 0,
            state: SessionState::Playing,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DrillKind {
        self.kind
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.round_count.get()
    }

    /// 1-based index of the round being played or last scored.
    #[must_use]
    pub fn round(&self) -> usize {
        match self.state {
            SessionState::Playing => self.scores.len() + 1,
            SessionState::RoundResult | SessionState::FinalResult => self.scores.len(),
        }
    }

    #[must_use]
    pub fn scores(&self) -> &[RoundScore] {
        &self.scores
    }

    #[must_use]
    pub fn last_score(&self) -> Option<RoundScore> {
        self.scores.last().copied()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Records the current round's score.
    ///
    /// Moves to [`SessionState::FinalResult`] after the last round, otherwise to
    /// [`SessionState::RoundResult`].
    pub fn submit_round(&mut self, score: RoundScore) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::Playing => {}
            SessionState::RoundResult => return Err(SessionError::RoundResultPending),
            SessionState::FinalResult => return Err(SessionError::Finished),
        }
        self.scores.push(score);
        self.total += u32::from(score.value());
        self.state = if self.scores.len() >= self.round_count.get() {
            SessionState::FinalResult
        } else {
            SessionState::RoundResult
        };
        tracing::info!(
            drill = %self.kind,
            round = self.scores.len(),
            of = self.round_count.get(),
            %score,
            total = self.total,
            "round scored"
        );
        if let Some(summary) = self.summary() {
            tracing::info!(
                drill = %self.kind,
                average = %summary.average,
                tier = %summary.tier,
                "session finished"
            );
        }
        Ok(self.state)
    }

    /// Leaves a round result and starts the next round.
    pub fn next_round(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::RoundResult => {
                self.state = SessionState::Playing;
                Ok(())
            }
            SessionState::Playing => Err(SessionError::NoRoundResult),
            SessionState::FinalResult => Err(SessionError::Finished),
        }
    }

    /// Withdraws the last scored round so it can be played again.
    ///
    /// Also allowed from [`SessionState::FinalResult`], reopening the last round.
    pub fn retry_round(&mut self) -> Result<RoundScore, SessionError> {
        if self.state.is_playing() {
            return Err(SessionError::NoRoundResult);
        }
        let score = self.scores.pop().ok_or(SessionError::NoRoundResult)?;
        self.total -= u32::from(score.value());
        self.state = SessionState::Playing;
        tracing::debug!(drill = %self.kind, round = self.round(), %score, "round withdrawn for retry");
        Ok(score)
    }

    /// Average and tier, available once the session is finished.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.state.is_final_result() {
            return None;
        }
        let rounds = self.round_count.get();
        let average = RoundScore::from_fidelity(f64::from(self.total) / rounds as f64);
        Some(SessionSummary {
            average,
            tier: ReflectionTier::from_average(average),
            total: self.total,
            rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> RoundScore {
        RoundScore::new(value).unwrap()
    }

    fn play(values: &[u8]) -> Session {
        let mut session = Session::new(DrillKind::Color, NonZeroUsize::new(values.len()).unwrap());
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                session.next_round().unwrap();
            }
            session.submit_round(score(*value)).unwrap();
        }
        session
    }

    #[test]
    fn test_perfect_session_is_expert() {
        let summary = play(&[100, 100, 100, 100, 100]).summary().unwrap();
        assert_eq!(summary.average, RoundScore::MAX);
        assert_eq!(summary.tier, ReflectionTier::Expert);
        assert_eq!(summary.total, 500);
    }

    #[test]
    fn test_average_just_below_pro_is_junior() {
        let summary = play(&[90, 90, 90, 90, 10]).summary().unwrap();
        assert_eq!(summary.average.value(), 74);
        assert_eq!(summary.tier, ReflectionTier::Junior);
    }

    #[test]
    fn test_state_transitions() {
        let mut session = Session::new(DrillKind::Shape, NonZeroUsize::new(2).unwrap());
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.round(), 1);
        assert_eq!(session.next_round(), Err(SessionError::NoRoundResult));

        assert_eq!(session.submit_round(score(40)), Ok(SessionState::RoundResult));
        assert_eq!(session.round(), 1);
        assert_eq!(
            session.submit_round(score(40)),
            Err(SessionError::RoundResultPending)
        );
        assert!(session.summary().is_none());

        session.next_round().unwrap();
        assert_eq!(session.round(), 2);
        assert_eq!(session.submit_round(score(60)), Ok(SessionState::FinalResult));
        assert_eq!(session.submit_round(score(60)), Err(SessionError::Finished));
        assert_eq!(session.next_round(), Err(SessionError::Finished));
        assert_eq!(session.summary().unwrap().average.value(), 50);
    }

    #[test]
    fn test_retry_withdraws_score() {
        let mut session = Session::new(DrillKind::Shape, NonZeroUsize::new(3).unwrap());
        assert_eq!(session.retry_round(), Err(SessionError::NoRoundResult));

        session.submit_round(score(30)).unwrap();
        assert_eq!(session.retry_round(), Ok(score(30)));
        assert_eq!(session.total(), 0);
        assert_eq!(session.round(), 1);
        assert!(session.state().is_playing());

        session.submit_round(score(90)).unwrap();
        assert_eq!(session.scores(), &[score(90)]);
        assert_eq!(session.total(), 90);
    }

    #[test]
    fn test_retry_reopens_final_round() {
        let mut session = play(&[100, 20]);
        assert!(session.state().is_final_result());
        session.retry_round().unwrap();
        assert!(session.summary().is_none());
        session.submit_round(score(100)).unwrap();
        assert_eq!(session.summary().unwrap().tier, ReflectionTier::Expert);
    }
}
