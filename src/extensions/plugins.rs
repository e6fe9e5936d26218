use downcast_rs::{Downcast, impl_downcast};

use crate::core::{ChartHost, ChartId};
use crate::interaction::PointerEvent;
use crate::render::CanvasContext;

/// Lifecycle hooks a chart host calls on its plugins.
///
/// Every hook has a no-op default so plugins implement only what they use.
/// Draw and tooltip hooks take `&self`: presentation never changes plugin
/// state.
pub trait ChartPlugin: Downcast {
    fn id(&self) -> &str;

    /// Chart finished initializing.
    fn after_init(&mut self, _chart: &dyn ChartHost) {}

    /// Host finished its own handling of a pointer event.
    fn after_event(&mut self, _chart: &mut dyn ChartHost, _event: &PointerEvent) {}

    /// Host finished drawing the chart.
    fn after_draw(&self, _chart: &dyn ChartHost, _canvas: &mut dyn CanvasContext) {}

    /// Returns `false` to hide tooltips for this draw.
    fn before_tooltip_draw(&self, _chart: &dyn ChartHost) -> bool {
        true
    }

    /// Chart is being destroyed by the host.
    fn after_destroy(&mut self, _chart: ChartId) {}
}

impl_downcast!(ChartPlugin);
