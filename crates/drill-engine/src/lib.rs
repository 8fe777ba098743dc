//! Game state for the design drills: color matching, Bézier shaping, kerning and layout.
//!
//! - [`core`] - Plain data: colors, points and curves, kerning gaps, layout elements, scores
//! - [`catalog`] - Static level catalogs and the [`LevelCursor`](catalog::LevelCursor) that walks them
//! - [`engine`] - Drill state objects, the round [`Session`] and [`ReflectionTier`]s
//!
//! Scoring lives in the `drill-evaluator` crate; this crate only stores the
//! configurations a scorer compares and records the scores it produces.

pub use self::{core::*, engine::*};

pub mod catalog;
pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    #[display("a round result is pending; advance or retry before submitting again")]
    RoundResultPending,
    #[display("no round result is pending")]
    NoRoundResult,
    #[display("session already finished")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("gap index {index} out of range for {len} gaps")]
pub struct GapIndexError {
    pub index: usize,
    pub len: usize,
}
