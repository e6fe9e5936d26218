use tracing::{debug, trace};

use crate::core::ChartHost;
use crate::interaction::CompletedDrag;

use super::{
    CoordinateMapper, SelectCallbacks, SelectionBounds, SelectionDirection, SelectionSession,
    filter_datasets,
};

/// What happened to a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionOutcome {
    /// Drag too short on at least one axis; treated as a click.
    Discarded,
    /// Chart has no usable numeric scales.
    Inert,
    /// `before_select` vetoed the bounds.
    Rejected(SelectionBounds),
    Committed {
        bounds: SelectionBounds,
        selected_points: usize,
    },
}

/// Turns a finished drag into a selection.
///
/// The session is only written when the selection is committed.
pub fn finalize_drag(
    session: &mut SelectionSession,
    chart: &dyn ChartHost,
    drag: CompletedDrag,
    direction: SelectionDirection,
    callbacks: &mut SelectCallbacks,
) -> SelectionOutcome {
    if !drag.exceeds_min_distance() {
        trace!(chart = chart.id().0, "drag shorter than minimum distance, ignoring");
        return SelectionOutcome::Discarded;
    }

    let Some(mapper) = CoordinateMapper::resolve(chart) else {
        debug!(chart = chart.id().0, "no usable scales, selection skipped");
        return SelectionOutcome::Inert;
    };
    let bounds = mapper.bounds_for_drag(drag, direction);

    if !callbacks.before_select(&bounds) {
        debug!(chart = chart.id().0, ?bounds, "selection rejected by before_select");
        return SelectionOutcome::Rejected(bounds);
    }

    let selected = filter_datasets(chart.datasets(), &bounds);
    let selected_points: usize = selected.iter().map(|dataset| dataset.len()).sum();
    debug!(
        chart = chart.id().0,
        datasets = selected.len(),
        selected_points,
        ?bounds,
        "selection committed"
    );

    session.commit_selection(bounds.x_range);
    callbacks.after_select(&bounds, selected);

    SelectionOutcome::Committed {
        bounds,
        selected_points,
    }
}
