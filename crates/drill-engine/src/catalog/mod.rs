//! Level catalogs for the catalog-driven drills (shape, type, layout).
//!
//! A [`Catalog`] is plain data: an ordered list of levels per drill. The built-in
//! catalog comes from [`Catalog::builtin`]; a replacement can be deserialized from
//! JSON and must pass [`Catalog::validate`] before use. Drills walk their levels
//! with a [`LevelCursor`], whose exhaustion ends the session.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "shape": [{ "id": 1, "name": "...", "instruction": "...",
//!               "curve": { "p0": {"x": 100, "y": 300}, "p1": ..., "p2": ..., "p3": ... } }],
//!   "kerning": [{ "id": 1, "word": "AVA", "font_family": "serif",
//!                 "instruction": "...", "ideal_gaps": [-15, -15] }],
//!   "layout": [{ "id": 1, "name": "...", "instruction": "...", "grid": "center",
//!                "elements": [{ "id": "1", "kind": "box", "size": {"width": 100, "height": 100},
//!                               "start": {"x": 20, "y": 20}, "target": {"x": 125, "y": 115} }] }]
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{CubicBezier, GridGuide, LayoutCanvas, LayoutElement, Size};

pub use self::cursor::LevelCursor;

mod builtin;
mod cursor;

/// A Bézier target: match the control points of `curve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLevel {
    pub id: u32,
    pub name: String,
    pub instruction: String,
    pub curve: CubicBezier,
}

impl ShapeLevel {
    /// Logical canvas the curve is drawn on; handles are clamped to it.
    pub const CANVAS: Size = Size::new(600.0, 400.0);
}

/// A kerning target: the ideal gap after each letter but the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KerningLevel {
    pub id: u32,
    pub word: String,
    pub font_family: String,
    pub instruction: String,
    pub ideal_gaps: Vec<i32>,
}

impl KerningLevel {
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.word.chars()
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}

/// A layout target: move every element to its target position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLevel {
    pub id: u32,
    pub name: String,
    pub instruction: String,
    #[serde(default)]
    pub grid: GridGuide,
    pub elements: Vec<LayoutElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub shape: Vec<ShapeLevel>,
    pub kerning: Vec<KerningLevel>,
    pub layout: Vec<LayoutLevel>,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    #[display("{drill} catalog has no levels")]
    NoLevels { drill: &'static str },
    #[display("kerning level {level}: word {word:?} needs at least two letters")]
    WordTooShort { level: u32, word: String },
    #[display("kerning level {level}: {word:?} needs {expected} gaps, found {found}")]
    GapCountMismatch {
        level: u32,
        word: String,
        expected: usize,
        found: usize,
    },
    #[display("layout level {level} has no elements")]
    NoElements { level: u32 },
    #[display("layout level {level}: element id {id:?} is empty or duplicated")]
    BadElementId { level: u32, id: String },
    #[display("layout level {level}: element {id:?} does not fit in the container")]
    ElementTooLarge { level: u32, id: String },
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The levels shipped with the drills.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            shape: builtin::shape_levels(),
            kerning: builtin::kerning_levels(),
            layout: builtin::layout_levels(),
        }
    }

    /// Checks the structural invariants the drills rely on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.shape.is_empty() {
            return Err(CatalogError::NoLevels { drill: "shape" });
        }
        if self.kerning.is_empty() {
            return Err(CatalogError::NoLevels { drill: "kerning" });
        }
        if self.layout.is_empty() {
            return Err(CatalogError::NoLevels { drill: "layout" });
        }
        self.kerning.iter().try_for_each(validate_kerning_level)?;
        self.layout.iter().try_for_each(validate_layout_level)?;
        Ok(())
    }
}

fn validate_kerning_level(level: &KerningLevel) -> Result<(), CatalogError> {
    let letters = level.letter_count();
    if letters < 2 {
        return Err(CatalogError::WordTooShort {
            level: level.id,
            word: level.word.clone(),
        });
    }
    if level.ideal_gaps.len() != letters - 1 {
        return Err(CatalogError::GapCountMismatch {
            level: level.id,
            word: level.word.clone(),
            expected: letters - 1,
            found: level.ideal_gaps.len(),
        });
    }
    Ok(())
}

fn validate_layout_level(level: &LayoutLevel) -> Result<(), CatalogError> {
    if level.elements.is_empty() {
        return Err(CatalogError::NoElements { level: level.id });
    }
    let container = LayoutCanvas::CONTAINER_SIDE;
    let mut seen = HashSet::new();
    for element in &level.elements {
        if element.id.is_empty() || !seen.insert(element.id.as_str()) {
            return Err(CatalogError::BadElementId {
                level: level.id,
                id: element.id.clone(),
            });
        }
        if element.size.width > container || element.size.height > container {
            return Err(CatalogError::ElementTooLarge {
                level: level.id,
                id: element.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.shape.len(), 5);
        assert_eq!(catalog.kerning.len(), 5);
        assert_eq!(catalog.layout.len(), 5);
    }

    #[test]
    fn test_json_roundtrip_preserves_catalog() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_layout_defaults_when_omitted() {
        let json = r#"{
            "id": 9, "name": "n", "instruction": "i",
            "elements": [{ "id": "x", "size": {"width": 10, "height": 10},
                           "start": {"x": 0, "y": 0}, "target": {"x": 5, "y": 5} }]
        }"#;
        let level: LayoutLevel = serde_json::from_str(json).unwrap();
        assert_eq!(level.grid, GridGuide::None);
        assert_eq!(level.elements[0].label, None);
    }

    #[test]
    fn test_rejects_gap_count_mismatch() {
        let mut catalog = Catalog::builtin();
        catalog.kerning[1].ideal_gaps.pop();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::GapCountMismatch {
                level: 2,
                word: "TYPE".into(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_rejects_single_letter_word() {
        let mut catalog = Catalog::builtin();
        catalog.kerning[0].word = "A".into();
        catalog.kerning[0].ideal_gaps.clear();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::WordTooShort { level: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_element_ids() {
        let mut catalog = Catalog::builtin();
        catalog.layout[2].elements[1].id = "1".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::BadElementId { level: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_element() {
        let mut catalog = Catalog::builtin();
        catalog.layout[0].elements[0].size = Size::new(400.0, 10.0);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ElementTooLarge { level: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_drill() {
        let mut catalog = Catalog::builtin();
        catalog.layout.clear();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::NoLevels { drill: "layout" })
        );
    }
}
