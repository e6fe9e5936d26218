use std::fmt;

use super::{SelectedDataset, SelectionBounds};

pub type BeforeSelectFn = Box<dyn FnMut(&SelectionBounds) -> bool>;
pub type AfterSelectFn = Box<dyn FnMut(&SelectionBounds, Vec<SelectedDataset>)>;

/// User hooks around a completed selection.
///
/// `before_select` may veto the selection; `after_select` receives the
/// filtered datasets. Defaults allow everything and ignore the result.
pub struct SelectCallbacks {
    before_select: BeforeSelectFn,
    after_select: AfterSelectFn,
}

impl Default for SelectCallbacks {
    fn default() -> Self {
        Self {
            before_select: Box::new(|_| true),
            after_select: Box::new(|_, _| {}),
        }
    }
}

impl SelectCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_before_select(
        mut self,
        callback: impl FnMut(&SelectionBounds) -> bool + 'static,
    ) -> Self {
        self.before_select = Box::new(callback);
        self
    }

    #[must_use]
    pub fn with_after_select(
        mut self,
        callback: impl FnMut(&SelectionBounds, Vec<SelectedDataset>) + 'static,
    ) -> Self {
        self.after_select = Box::new(callback);
        self
    }

    pub fn before_select(&mut self, bounds: &SelectionBounds) -> bool {
        (self.before_select)(bounds)
    }

    pub fn after_select(&mut self, bounds: &SelectionBounds, datasets: Vec<SelectedDataset>) {
        (self.after_select)(bounds, datasets);
    }
}

impl fmt::Debug for SelectCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectCallbacks").finish_non_exhaustive()
    }
}
