//! Drill state and round progression.
//!
//! Each game mode owns one drill object, created when the mode is entered and
//! dropped when the player leaves it:
//!
//! - [`ColorDrill`] - Random HSL targets for a fixed number of rounds
//! - [`ShapeDrill`] - Bézier control points, one round per catalog level
//! - [`KerningDrill`] - Letter gaps, one round per catalog level
//! - [`LayoutDrill`] - Element placement, one round per catalog level
//!
//! All of them implement [`Drill`], which exposes the target/attempt pair a scorer
//! compares, and record scores in a [`Session`]:
//!
//! ```text
//! Playing --submit--> RoundResult --next_round--> Playing
//!    |                    |
//!    |                  retry (shape) --> Playing
//!    +--submit (last round)--> FinalResult
//! ```
//!
//! A finished [`Session`] yields a [`SessionSummary`] with the rounded average
//! score and its [`ReflectionTier`].

pub use self::{
    color_drill::*, drill::*, kerning_drill::*, layout_drill::*, reflection::*, seed::*,
    session::*, shape_drill::*,
};

mod color_drill;
mod drill;
mod kerning_drill;
mod layout_drill;
mod reflection;
mod seed;
mod session;
mod shape_drill;
