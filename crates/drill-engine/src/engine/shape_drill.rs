use std::num::NonZeroUsize;

use crate::{
    ControlHandle, ControlPoints, CubicBezier, Drill, DrillKind, Point, RoundScore, Session,
    SessionError, SessionState,
    catalog::{LevelCursor, ShapeLevel},
};

/// Bézier shaping: drag two control points until the curve matches the target.
///
/// The anchors come from the level and are shared with the target; only the
/// control points are the player's. They start on the straight line between the
/// anchors (at 1/3 and 2/3) at every level start and on retry.
#[derive(Debug, Clone)]
pub struct ShapeDrill {
    levels: LevelCursor<ShapeLevel>,
    controls: ControlPoints,
    selected: ControlHandle,
    session: Session,
}

impl ShapeDrill {
    /// Returns `None` for an empty level list.
    #[must_use]
    pub fn new(levels: Vec<ShapeLevel>) -> Option<Self> {
        let levels = LevelCursor::new(levels)?;
        let rounds = NonZeroUsize::new(levels.len())?;
        let controls = levels.current().curve.linear_controls();
        let this = Self {
            levels,
            controls,
            selected: ControlHandle::First,
            session: Session::new(DrillKind::Shape, rounds),
        };
        this.log_level();
        Some(this)
    }

    #[must_use]
    pub fn level(&self) -> &ShapeLevel {
        self.levels.current()
    }

    #[must_use]
    pub fn controls(&self) -> &ControlPoints {
        &self.controls
    }

    /// The player's curve: level anchors with the player's control points.
    #[must_use]
    pub fn curve(&self) -> CubicBezier {
        self.level().curve.with_controls(self.controls)
    }

    #[must_use]
    pub fn selected_handle(&self) -> ControlHandle {
        self.selected
    }

    pub fn toggle_handle(&mut self) {
        self.selected = self.selected.toggled();
    }

    /// Moves a control point to `point`, clamped to [`ShapeLevel::CANVAS`].
    pub fn move_handle(&mut self, handle: ControlHandle, point: Point) {
        if !self.is_editable() {
            return;
        }
        let canvas = ShapeLevel::CANVAS;
        let point = point.clamped(Point::default(), Point::new(canvas.width, canvas.height));
        self.controls.set(handle, point);
    }

    /// Moves the selected control point by `(dx, dy)`.
    pub fn step_selected(&mut self, dx: f64, dy: f64) {
        let point = self.controls.get(self.selected).offset(dx, dy);
        self.move_handle(self.selected, point);
    }

    /// Withdraws the last score and replays the same level from the straight line.
    pub fn retry(&mut self) -> Result<RoundScore, SessionError> {
        let score = self.session.retry_round()?;
        self.reset_controls();
        Ok(score)
    }

    fn reset_controls(&mut self) {
        self.controls = self.level().curve.linear_controls();
        self.selected = ControlHandle::First;
    }

    fn log_level(&self) {
        let level = self.level();
        tracing::debug!(
            level = level.id,
            name = %level.name,
            position = self.levels.position(),
            of = self.levels.len(),
            "shape level loaded"
        );
    }
}

impl Drill for ShapeDrill {
    type Target = CubicBezier;
    type Attempt = ControlPoints;

    fn kind(&self) -> DrillKind {
        DrillKind::Shape
    }

    fn target(&self) -> &CubicBezier {
        &self.level().curve
    }

    fn attempt(&self) -> &ControlPoints {
        &self.controls
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn submit(&mut self, score: RoundScore) -> Result<SessionState, SessionError> {
        self.session.submit_round(score)
    }

    fn next_round(&mut self) -> Result<(), SessionError> {
        self.session.next_round()?;
        let advanced = self.levels.advance();
        debug_assert!(advanced, "session rounds follow the level count");
        self.reset_controls();
        self.log_level();
        Ok(())
    }
}
