use serde::{Deserialize, Serialize};

/// A point in logical canvas space (pixels, y pointing down).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Clamps each coordinate into `[min, max]`.
    #[must_use]
    pub fn clamped(self, min: Self, max: Self) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }
}

/// Width and height of a canvas or element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Which of the two off-curve points of a [`CubicBezier`] is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum ControlHandle {
    #[display("P1")]
    First,
    #[display("P2")]
    Second,
}

impl ControlHandle {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// The pair of control points that shape a cubic Bézier between fixed anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub p1: Point,
    pub p2: Point,
}

impl ControlPoints {
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub const fn get(&self, handle: ControlHandle) -> Point {
        match handle {
            ControlHandle::First => self.p1,
            ControlHandle::Second => self.p2,
        }
    }

    pub const fn set(&mut self, handle: ControlHandle, point: Point) {
        match handle {
            ControlHandle::First => self.p1 = point,
            ControlHandle::Second => self.p2 = point,
        }
    }
}

/// A cubic Bézier segment: anchors `p0`/`p3` and control points `p1`/`p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    #[must_use]
    pub const fn controls(&self) -> ControlPoints {
        ControlPoints::new(self.p1, self.p2)
    }

    /// Same anchors, different control points.
    #[must_use]
    pub const fn with_controls(&self, controls: ControlPoints) -> Self {
        Self::new(self.p0, controls.p1, controls.p2, self.p3)
    }

    /// Control points placed at 1/3 and 2/3 of the straight line between the anchors.
    ///
    /// A curve with these controls is a straight segment.
    #[must_use]
    pub fn linear_controls(&self) -> ControlPoints {
        ControlPoints::new(
            self.p0.lerp(self.p3, 1.0 / 3.0),
            self.p0.lerp(self.p3, 2.0 / 3.0),
        )
    }

    /// Evaluates the curve at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }

    /// `segments + 1` evenly spaced (in `t`) points from `p0` to `p3`.
    #[expect(clippy::cast_precision_loss)]
    pub fn sample(&self, segments: usize) -> impl Iterator<Item = Point> + '_ {
        let segments = segments.max(1);
        (0..=segments).map(move |i| self.point_at(i as f64 / segments as f64))
    }
}
