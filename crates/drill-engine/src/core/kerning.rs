use std::ops::RangeInclusive;

use crate::GapIndexError;

/// Player-edited letter gaps for one word, with a cursor on the gap being edited.
///
/// The number of gaps is fixed at construction (one fewer than the word's letters)
/// and never changes, so it always matches the level's ideal gaps. Only the
/// selected gap is mutated, and every width is clamped to [`Self::GAP_RANGE`].
///
/// ```
/// use drill_engine::KerningAttempt;
///
/// let mut attempt = KerningAttempt::new(vec![20, 30, 40]);
/// attempt.select(2).unwrap();
/// attempt.step_selected(100);
/// assert_eq!(attempt.gaps(), &[20, 30, 60]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KerningAttempt {
    gaps: Vec<i32>,
    selected: usize,
}

impl KerningAttempt {
    /// Range offered by the spacing slider, in pixels.
    pub const GAP_RANGE: RangeInclusive<i32> = -30..=60;

    /// Creates an attempt from initial gap widths, selecting the first gap.
    #[must_use]
    pub fn new(gaps: Vec<i32>) -> Self {
        let gaps = gaps.into_iter().map(clamp_gap).collect();
        Self { gaps, selected: 0 }
    }

    #[must_use]
    pub fn gaps(&self) -> &[i32] {
        &self.gaps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Width of the selected gap, or `None` for a word without gaps.
    #[must_use]
    pub fn selected_gap(&self) -> Option<i32> {
        self.gaps.get(self.selected).copied()
    }

    pub fn select(&mut self, index: usize) -> Result<(), GapIndexError> {
        if index >= self.gaps.len() {
            return Err(GapIndexError {
                index,
                len: self.gaps.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Moves the cursor right, stopping at the last gap.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.gaps.len() {
            self.selected += 1;
        }
    }

    /// Moves the cursor left, stopping at the first gap.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Sets the selected gap's width, clamped to [`Self::GAP_RANGE`].
    pub fn set_selected(&mut self, width: i32) {
        if let Some(gap) = self.gaps.get_mut(self.selected) {
            *gap = clamp_gap(width);
        }
    }

    pub fn step_selected(&mut self, delta: i32) {
        if let Some(width) = self.selected_gap() {
            self.set_selected(width.saturating_add(delta));
        }
    }
}

fn clamp_gap(width: i32) -> i32 {
    width.clamp(*KerningAttempt::GAP_RANGE.start(), *KerningAttempt::GAP_RANGE.end())
}
