//! Layout score.
//!
//! ```text
//! average_distance = Σ |position - target| / placed_element_count
//! fidelity         = max(0, 100 - average_distance)
//! ```
//!
//! Placed elements are matched with level elements by id, not by order. A placed
//! element without a matching level element adds nothing to the sum but still
//! counts in the divisor; the mismatch is logged as a warning.

use drill_engine::{LayoutElement, PlacedElement, RoundScore};

use crate::fidelity_scorer::FidelityScorer;

/// One point lost per pixel of average displacement.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutScorer;

impl FidelityScorer for LayoutScorer {
    type Target = [LayoutElement];
    type Attempt = [PlacedElement];

    #[expect(clippy::cast_precision_loss)]
    fn fidelity(&self, target: &[LayoutElement], attempt: &[PlacedElement]) -> f64 {
        if attempt.is_empty() {
            return f64::from(RoundScore::MAX.value());
        }
        let total_distance: f64 = attempt
            .iter()
            .filter_map(|placed| {
                let Some(element) = target.iter().find(|element| element.id == placed.id) else {
                    tracing::warn!(id = %placed.id, "placed element has no target; ignored");
                    return None;
                };
                Some(placed.position.distance(element.target))
            })
            .sum();
        let average_distance = total_distance / attempt.len() as f64;
        (100.0 - average_distance).max(0.0)
    }
}
