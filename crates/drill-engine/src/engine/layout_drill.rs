use std::num::NonZeroUsize;

use crate::{
    Drill, DrillKind, LayoutCanvas, LayoutElement, PlacedElement, Point, RoundScore, Session,
    SessionError, SessionState, Size,
    catalog::{LayoutLevel, LevelCursor},
};

/// Layout: drag elements inside a square container onto their target positions.
#[derive(Debug, Clone)]
pub struct LayoutDrill {
    levels: LevelCursor<LayoutLevel>,
    canvas: LayoutCanvas,
    selected: usize,
    session: Session,
}

impl LayoutDrill {
    /// Returns `None` for an empty level list.
    #[must_use]
    pub fn new(levels: Vec<LayoutLevel>) -> Option<Self> {
        let levels = LevelCursor::new(levels)?;
        let rounds = NonZeroUsize::new(levels.len())?;
        let canvas = canvas_for(levels.current());
        let this = Self {
            levels,
            canvas,
            selected: 0,
            session: Session::new(DrillKind::Layout, rounds),
        };
        this.log_level();
        Some(this)
    }

    #[must_use]
    pub fn level(&self) -> &LayoutLevel {
        self.levels.current()
    }

    #[must_use]
    pub fn canvas(&self) -> &LayoutCanvas {
        &self.canvas
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Cycles the selection through the level's elements.
    pub fn select_next(&mut self) {
        let len = self.canvas.elements().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Drags element `index` so its centre follows `pointer`. Ignored outside of play.
    pub fn drag_to(&mut self, index: usize, pointer: Point) -> Option<Point> {
        if !self.is_editable() {
            return None;
        }
        self.canvas.drag_to(index, pointer)
    }

    /// Nudges the selected element by `(dx, dy)`. Ignored outside of play.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) -> Option<Point> {
        if !self.is_editable() {
            return None;
        }
        self.canvas.nudge(self.selected, dx, dy)
    }

    fn log_level(&self) {
        let level = self.level();
        tracing::debug!(
            level = level.id,
            name = %level.name,
            grid = %level.grid,
            elements = level.elements.len(),
            position = self.levels.position(),
            of = self.levels.len(),
            "layout level loaded"
        );
    }
}

impl Drill for LayoutDrill {
    type Target = [LayoutElement];
    type Attempt = [PlacedElement];

    fn kind(&self) -> DrillKind {
        DrillKind::Layout
    }

    fn target(&self) -> &[LayoutElement] {
        &self.level().elements
    }

    fn attempt(&self) -> &[PlacedElement] {
        self.canvas.elements()
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
        self.canvas = canvas_for(self.levels.current());
        self.selected = 0;
        self.log_level();
        Ok(())
    }
}

fn canvas_for(level: &LayoutLevel) -> LayoutCanvas {
    LayoutCanvas::new(Size::square(LayoutCanvas::CONTAINER_SIDE), &level.elements)
}
