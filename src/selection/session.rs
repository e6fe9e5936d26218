use crate::core::PixelPoint;
use crate::interaction::DragTracker;

use super::Interval;

/// Per-chart box-select state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionSession {
    enabled: bool,
    drag: DragTracker,
    suppress_tooltips: bool,
    last_selection: Option<Interval>,
}

impl SelectionSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session has handled at least one event.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mark_enabled(&mut self) {
        self.enabled = true;
    }

    #[must_use]
    pub fn drag(&self) -> DragTracker {
        self.drag
    }

    pub fn drag_mut(&mut self) -> &mut DragTracker {
        &mut self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn pointer(&self) -> Option<PixelPoint> {
        self.drag.pointer()
    }

    #[must_use]
    pub fn suppress_tooltips(&self) -> bool {
        self.suppress_tooltips
    }

    pub fn set_suppress_tooltips(&mut self, suppress: bool) {
        self.suppress_tooltips = suppress;
    }

    /// X interval of the last committed selection.
    ///
    /// `None` before any selection, and after a selection that left X
    /// unconstrained.
    #[must_use]
    pub fn last_selection(&self) -> Option<Interval> {
        self.last_selection
    }

    pub fn commit_selection(&mut self, x_range: Option<Interval>) {
        self.last_selection = x_range;
    }

    /// Tooltips are hidden while dragging or when explicitly suppressed.
    #[must_use]
    pub fn tooltips_allowed(&self) -> bool {
        !self.is_dragging() && !self.suppress_tooltips
    }
}
