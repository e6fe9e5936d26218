use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::api::BoxSelectOptions;
use crate::core::{ChartHost, ChartId};
use crate::interaction::{DragTransition, PointerEvent};
use crate::render::CanvasContext;
use crate::selection::{
    Interval, SelectCallbacks, SelectionOutcome, SelectionSession, finalize_drag,
    selection_rect,
};

use super::ChartPlugin;

pub const BOXSELECT_PLUGIN_ID: &str = "boxselect";

/// Drag-to-select plugin for scatter and line charts.
///
/// Keeps one `SelectionSession` per initialized chart, so a single instance
/// can serve several charts.
#[derive(Debug, Default)]
pub struct BoxSelectPlugin {
    sessions: IndexMap<ChartId, SelectionSession>,
    callbacks: SelectCallbacks,
}

impl BoxSelectPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: SelectCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: SelectCallbacks) {
        self.callbacks = callbacks;
    }

    #[must_use]
    pub fn session(&self, chart: ChartId) -> Option<&SelectionSession> {
        self.sessions.get(&chart)
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// X interval of the chart's last committed selection.
    #[must_use]
    pub fn last_selection(&self, chart: ChartId) -> Option<Interval> {
        self.sessions
            .get(&chart)
            .and_then(SelectionSession::last_selection)
    }

    /// Returns `false` when the chart has no session.
    pub fn set_suppress_tooltips(&mut self, chart: ChartId, suppress: bool) -> bool {
        match self.sessions.get_mut(&chart) {
            Some(session) => {
                session.set_suppress_tooltips(suppress);
                true
            }
            None => false,
        }
    }

    /// Drops the chart's session. Returns `true` when one existed.
    pub fn forget_chart(&mut self, chart: ChartId) -> bool {
        self.sessions.shift_remove(&chart).is_some()
    }

    /// Runs the drag machine for one event and finalizes a finished drag.
    ///
    /// Returns the selection outcome when this event ended a drag.
    pub fn handle_event(
        &mut self,
        chart: &mut dyn ChartHost,
        event: &PointerEvent,
    ) -> Option<SelectionOutcome> {
        let chart_type = chart.chart_type();
        if !chart_type.supports_box_select() {
            trace!(chart = chart.id().0, ?chart_type, "chart type not selectable");
            return None;
        }
        let Some(session) = self.sessions.get_mut(&chart.id()) else {
            trace!(chart = chart.id().0, "event for chart without session");
            return None;
        };

        let options = BoxSelectOptions::from_chart_options(chart.options());
        session.mark_enabled();

        let outcome = match session.drag_mut().apply(
            event.position,
            event.pressed_buttons(),
            options.select.enabled,
        ) {
            DragTransition::Started { start } => {
                debug!(chart = chart.id().0, x = start.x, y = start.y, "drag started");
                None
            }
            DragTransition::Ended(drag) => Some(finalize_drag(
                session,
                &*chart,
                drag,
                options.select.direction,
                &mut self.callbacks,
            )),
            DragTransition::None => None,
        };

        session.drag_mut().track_pointer(event.position);
        chart.request_redraw();
        outcome
    }

    /// Paints the in-progress selection rectangle, if any.
    pub fn draw_overlay(&self, chart: &dyn ChartHost, canvas: &mut dyn CanvasContext) {
        let Some(session) = self.sessions.get(&chart.id()) else {
            return;
        };
        if !session.is_enabled() {
            return;
        }
        let Some(start) = session.drag().drag_start() else {
            return;
        };

        let options = BoxSelectOptions::from_chart_options(chart.options());
        let pointer = session.pointer().unwrap_or(start);
        let Some(rect) = selection_rect(
            start,
            pointer,
            options.select.direction,
            chart,
            options.overlay_style(),
        ) else {
            return;
        };

        if let Err(err) = rect.validate() {
            warn!(chart = chart.id().0, error = %err, "skipping invalid selection overlay");
            return;
        }
        rect.paint(canvas);
    }

    #[must_use]
    pub fn tooltips_allowed(&self, chart: ChartId) -> bool {
        self.sessions
            .get(&chart)
            .is_none_or(SelectionSession::tooltips_allowed)
    }
}

impl ChartPlugin for BoxSelectPlugin {
    fn id(&self) -> &str {
        BOXSELECT_PLUGIN_ID
    }

    fn after_init(&mut self, chart: &dyn ChartHost) {
        if !chart.has_x_axis() {
            debug!(chart = chart.id().0, "chart has no x axis, box select stays inert");
            return;
        }
        self.sessions.insert(chart.id(), SelectionSession::new());
    }

    fn after_event(&mut self, chart: &mut dyn ChartHost, event: &PointerEvent) {
        self.handle_event(chart, event);
    }

    fn after_draw(&self, chart: &dyn ChartHost, canvas: &mut dyn CanvasContext) {
        self.draw_overlay(chart, canvas);
    }

    fn before_tooltip_draw(&self, chart: &dyn ChartHost) -> bool {
        self.tooltips_allowed(chart.id())
    }

    fn after_destroy(&mut self, chart: ChartId) {
        self.forget_chart(chart);
    }
}
