//! Fidelity scoring for the design drills.
//!
//! Every game mode has one scorer that compares the player's attempt with the
//! round's target and produces a [`RoundScore`](drill_engine::RoundScore) in
//! `0..=100`:
//!
//! - [`color_scorer`] - Weighted hue/saturation/lightness distance (hue dominates)
//! - [`curve_scorer`] - Distance between Bézier control points
//! - [`kerning_scorer`] - Average absolute gap error
//! - [`layout_scorer`] - Average element displacement, matched by id
//!
//! # Architecture
//!
//! ```text
//! Drill (drill-engine)        FidelityScorer (this crate)
//!   target()  ─────────────┐
//!   attempt() ─────────────┴──> fidelity() ──> RoundScore
//!   submit()  <───────────────────────────────────┘
//! ```
//!
//! Scorers are pure: they never look at session state and always return the same
//! score for the same pair of configurations. A matching configuration scores
//! exactly 100.
//!
//! [`fidelity_scorer::score_and_submit`] ties a scorer to a drill: it scores the
//! current attempt and records the result in the drill's session.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use drill_engine::{ColorDrill, Drill, DrillSeed};
//! use drill_evaluator::{color_scorer::ColorScorer, fidelity_scorer::score_and_submit};
//!
//! let mut drill = ColorDrill::new(NonZeroUsize::new(3).unwrap(), DrillSeed::from(1));
//! let score = score_and_submit(&mut drill, &ColorScorer).unwrap();
//! assert_eq!(drill.session().last_score(), Some(score));
//! ```

pub mod color_scorer;
pub mod curve_scorer;
pub mod fidelity_scorer;
pub mod kerning_scorer;
pub mod layout_scorer;
