use std::num::NonZeroUsize;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::{
    Drill, DrillKind, DrillSeed, GapIndexError, KerningAttempt, RoundScore, Session,
    SessionError, SessionState,
    catalog::{KerningLevel, LevelCursor},
};

/// Kerning: set the gap between each pair of letters to the level's ideal spacing.
///
/// Every level starts from scrambled gaps, uniform in `10..50` pixels, with the
/// first gap selected. Only the selected gap is edited at a time; scoring always
/// compares the full gap vector.
#[derive(Debug, Clone)]
pub struct KerningDrill {
    rng: Pcg32,
    levels: LevelCursor<KerningLevel>,
    attempt: KerningAttempt,
    session: Session,
}

impl KerningDrill {
    /// Returns `None` for an empty level list.
    #[must_use]
    pub fn new(levels: Vec<KerningLevel>, seed: DrillSeed) -> Option<Self> {
        let levels = LevelCursor::new(levels)?;
        let rounds = NonZeroUsize::new(levels.len())?;
        let mut rng = seed.rng();
        let attempt = scrambled(&mut rng, levels.current().ideal_gaps.len());
        let this = Self {
            rng,
            levels,
            attempt,
            session: Session::new(DrillKind::Type, rounds),
        };
        tracing::debug!(%seed, "kerning drill started");
        this.log_level();
        Some(this)
    }

    #[must_use]
    pub fn level(&self) -> &KerningLevel {
        self.levels.current()
    }

    #[must_use]
    pub fn gaps(&self) -> &KerningAttempt {
        &self.attempt
    }

    pub fn select_gap(&mut self, index: usize) -> Result<(), GapIndexError> {
        self.attempt.select(index)
    }

    pub fn select_next_gap(&mut self) {
        self.attempt.select_next();
    }

    pub fn select_prev_gap(&mut self) {
        self.attempt.select_prev();
    }

    /// Sets the selected gap's width. Ignored outside of play.
    pub fn set_selected_gap(&mut self, width: i32) {
        if self.is_editable() {
            self.attempt.set_selected(width);
        }
    }

    /// Steps the selected gap's width. Ignored outside of play.
    pub fn step_selected_gap(&mut self, delta: i32) {
        if self.is_editable() {
            self.attempt.step_selected(delta);
        }
    }

    fn log_level(&self) {
        let level = self.level();
        tracing::debug!(
            level = level.id,
            word = %level.word,
            gaps = ?self.attempt.gaps(),
            position = self.levels.position(),
            of = self.levels.len(),
            "kerning level loaded"
        );
    }
}

impl Drill for KerningDrill {
    type Target = [i32];
    type Attempt = [i32];

    fn kind(&self) -> DrillKind {
        DrillKind::Type
    }

    fn target(&self) -> &[i32] {
        &self.level().ideal_gaps
    }

    fn attempt(&self) -> &[i32] {
        self.attempt.gaps()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn submit(&mut self, score: RoundScore) -> Result<SessionState, SessionError> {
        self.session.submit_round(score)
    }

    fn next_round(&mut self) -> Result<(), SessionError> {
        self.session.next_round()?;
        let advanced = self.levels.advance();
        debug_assert!(advanced, "session rounds follow the level count");
        self.attempt = scrambled(&mut self.rng, self.levels.current().ideal_gaps.len());
        self.log_level();
        Ok(())
    }
}

fn scrambled(rng: &mut Pcg32, len: usize) -> KerningAttempt {
    KerningAttempt::new((0..len).map(|_| rng.random_range(10..50)).collect())
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;

    use super::*;

    fn drill() -> KerningDrill {
        KerningDrill::new(Catalog::builtin().kerning, DrillSeed::from(3)).unwrap()
    }

    #[test]
    fn test_attempt_length_tracks_level() {
        let mut drill = drill();
        loop {
            assert_eq!(drill.attempt().len(), drill.target().len());
            assert!(drill.attempt().iter().all(|gap| (10..50).contains(gap)));
            assert_eq!(drill.gaps().selected_index(), 0);
            if drill.submit(RoundScore::MIN).unwrap().is_final_result() {
                break;
            }
            drill.next_round().unwrap();
        }
        assert_eq!(drill.level().word, "AVATAR");
    }

    #[test]
    fn test_edits_selected_gap_only() {
        let mut drill = drill();
        let before = drill.attempt().to_vec();
        drill.select_next_gap();
        drill.set_selected_gap(-15);
        assert_eq!(drill.attempt()[0], before[0]);
        assert_eq!(drill.attempt()[1], -15);

        drill.step_selected_gap(-100);
        assert_eq!(drill.attempt()[1], -30);
    }

    #[test]
    fn test_select_gap_out_of_range() {
        let mut drill = drill();
        assert_eq!(drill.select_gap(2), Err(GapIndexError { index: 2, len: 2 }));
        assert_eq!(drill.select_gap(1), Ok(()));
    }

    #[test]
    fn test_gaps_frozen_after_submit() {
        let mut drill = drill();
        drill.set_selected_gap(0);
        drill.submit(RoundScore::MIN).unwrap();
        drill.set_selected_gap(40);
        drill.step_selected_gap(5);
        assert_eq!(drill.attempt()[0], 0);
    }
}
