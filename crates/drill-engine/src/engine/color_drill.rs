use std::num::NonZeroUsize;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::{
    ColorChannel, ColorSample, Drill, DrillKind, DrillSeed, RoundScore, Session, SessionError,
    SessionState,
};

/// Default number of rounds in a color session.
pub const MAX_ROUNDS: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Color matching: reproduce a randomly generated HSL color.
///
/// Each round draws a new target (hue anywhere on the wheel, saturation and
/// lightness in `20..80`) and a starting color with a random hue at 50%
/// saturation and lightness.
#[derive(Debug, Clone)]
pub struct ColorDrill {
    rng: Pcg32,
    target: ColorSample,
    current: ColorSample,
    session: Session,
}

impl ColorDrill {
    #[must_use]
    pub fn new(rounds: NonZeroUsize, seed: DrillSeed) -> Self {
        let mut rng = seed.rng();
        let (target, current) = generate_round(&mut rng);
        tracing::debug!(%seed, rounds = rounds.get(), %target, "color drill started");
        Self {
            rng,
            target,
            current,
            session: Session::new(DrillKind::Color, rounds),
        }
    }

    #[must_use]
    pub fn target(&self) -> &ColorSample {
        &self.target
    }

    #[must_use]
    pub fn current(&self) -> &ColorSample {
        &self.current
    }

    /// Steps one channel of the player's color. Ignored outside of play.
    pub fn step(&mut self, channel: ColorChannel, delta: i32) {
        if self.is_editable() {
            self.current = self.current.stepped(channel, delta);
        }
    }

    /// Sets one channel of the player's color. Ignored outside of play.
    pub fn set(&mut self, channel: ColorChannel, value: u16) {
        if self.is_editable() {
            self.current = self.current.with_channel(channel, value);
        }
    }
}

impl Drill for ColorDrill {
    type Target = ColorSample;
    type Attempt = ColorSample;

    fn kind(&self) -> DrillKind {
        DrillKind::Color
    }

    fn target(&self) -> &ColorSample {
        &self.target
    }

    fn attempt(&self) -> &ColorSample {
        &self.current
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn submit(&mut self, score: RoundScore) -> Result<SessionState, SessionError> {
        self.session.submit_round(score)
    }

    fn next_round(&mut self) -> Result<(), SessionError> {
        self.session.next_round()?;
        (self.target, self.current) = generate_round(&mut self.rng);
        tracing::debug!(round = self.session.round(), target = %self.target, "color round generated");
        Ok(())
    }
}

fn generate_round(rng: &mut Pcg32) -> (ColorSample, ColorSample) {
    let target = ColorSample::new(
        rng.random_range(0..ColorSample::HUE_RANGE),
        rng.random_range(20..80),
        rng.random_range(20..80),
    );
    let current = ColorSample::new(rng.random_range(0..ColorSample::HUE_RANGE), 50, 50);
    (target, current)
}
