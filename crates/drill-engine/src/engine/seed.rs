use std::fmt;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

/// Seed for the random parts of a drill (color targets, scrambled kerning gaps).
///
/// Drills built from the same seed generate the same rounds, which makes a
/// session reproducible from its logged seed.
///
/// ```
/// use drill_engine::{ColorDrill, DrillSeed};
/// use std::num::NonZeroUsize;
///
/// let rounds = NonZeroUsize::new(5).unwrap();
/// let a = ColorDrill::new(rounds, DrillSeed::from(42));
/// let b = ColorDrill::new(rounds, DrillSeed::from(42));
/// assert_eq!(a.target(), b.target());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrillSeed(u64);

impl DrillSeed {
    /// A seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        rand::rng().random()
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn rng(self) -> Pcg32 {
        Pcg32::seed_from_u64(self.0)
    }
}

impl From<u64> for DrillSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DrillSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Distribution<DrillSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DrillSeed {
        DrillSeed(rng.random())
    }
}
