use serde::{Deserialize, Serialize};

use crate::{Point, Size};

/// Guide lines drawn over the layout container as a visual hint.
///
/// Guides never affect scoring.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GridGuide {
    #[display("center")]
    Center,
    #[display("thirds")]
    Thirds,
    #[display("columns")]
    Columns,
    #[default]
    #[display("none")]
    None,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Box,
    Text,
    Image,
}

/// A layout element as defined by a level: where it starts and where it belongs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutElement {
    pub id: String,
    #[serde(default)]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub size: Size,
    pub start: Point,
    pub target: Point,
}

/// A layout element as currently placed by the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub id: String,
    pub size: Size,
    pub position: Point,
}

/// The square container elements are dragged around in, with the player's placements.
///
/// Every position stored here satisfies `0 <= x <= container.width - width` and
/// `0 <= y <= container.height - height`.
///
/// Dragging depends only on the final pointer position, so repeating or
/// interleaving drag updates always settles on the same placement:
///
/// ```
/// use drill_engine::{LayoutCanvas, LayoutElement, Point, Size, ElementKind};
///
/// let element = LayoutElement {
///     id: "1".into(),
///     kind: ElementKind::Box,
///     label: None,
///     size: Size::square(100.0),
///     start: Point::new(20.0, 20.0),
///     target: Point::new(125.0, 115.0),
/// };
/// let mut canvas = LayoutCanvas::new(Size::square(350.0), &[element]);
///
/// canvas.drag_to(0, Point::new(400.0, -10.0));
/// canvas.drag_to(0, Point::new(90.0, 90.0));
/// canvas.drag_to(0, Point::new(175.0, 165.0));
/// assert_eq!(canvas.elements()[0].position, Point::new(125.0, 115.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCanvas {
    container: Size,
    elements: Vec<PlacedElement>,
}

impl LayoutCanvas {
    /// Side of the square container used by the built-in levels, in pixels.
    pub const CONTAINER_SIDE: f64 = 350.0;

    /// Places every element at its start position (clamped into the container).
    #[must_use]
    pub fn new(container: Size, elements: &[LayoutElement]) -> Self {
        let elements = elements
            .iter()
            .map(|element| PlacedElement {
                id: element.id.clone(),
                size: element.size,
                position: clamp_into(container, element.size, element.start),
            })
            .collect();
        Self {
            container,
            elements,
        }
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }

    /// Centres the element on `pointer`, then clamps it into the container.
    ///
    /// Returns the new position, or `None` if `index` is out of range.
    pub fn drag_to(&mut self, index: usize, pointer: Point) -> Option<Point> {
        let container = self.container;
        let element = self.elements.get_mut(index)?;
        let top_left = pointer.offset(-element.size.width / 2.0, -element.size.height / 2.0);
        element.position = clamp_into(container, element.size, top_left);
        Some(element.position)
    }

    /// Moves the element by `(dx, dy)`, then clamps it into the container.
    pub fn nudge(&mut self, index: usize, dx: f64, dy: f64) -> Option<Point> {
        let container = self.container;
        let element = self.elements.get_mut(index)?;
        element.position = clamp_into(container, element.size, element.position.offset(dx, dy));
        Some(element.position)
    }
}

fn clamp_into(container: Size, size: Size, position: Point) -> Point {
    let max = Point::new(
        (container.width - size.width).max(0.0),
        (container.height - size.height).max(0.0),
    );
    position.clamped(Point::default(), max)
}
