//! Core data types shared by every drill.
//!
//! - [`ColorSample`] - HSL color with integer channels
//! - [`Point`], [`ControlPoints`], [`CubicBezier`] - Logical-canvas geometry
//! - [`KerningAttempt`] - Player-edited letter gaps with a selected-gap cursor
//! - [`LayoutElement`], [`PlacedElement`], [`LayoutCanvas`] - Layout targets and player placements
//! - [`RoundScore`] - Fidelity score in `0..=100`

pub use self::{color::*, geometry::*, kerning::*, layout::*, score::*};

mod color;
mod geometry;
mod kerning;
mod layout;
mod score;
