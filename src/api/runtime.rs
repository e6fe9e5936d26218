use tracing::debug;

use crate::core::ChartHost;
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::PointerEvent;
use crate::render::CanvasContext;

/// Owns one chart and its plugins and forwards host lifecycle calls to them.
///
/// Plugins run in registration order.
pub struct ChartRuntime<C: ChartHost> {
    chart: C,
    plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<C: ChartHost> ChartRuntime<C> {
    #[must_use]
    pub fn new(chart: C) -> Self {
        Self {
            chart,
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut C {
        &mut self.chart
    }

    /// Registers a plugin with unique identifier and runs its init hook.
    pub fn register_plugin(&mut self, mut plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(ChartError::DuplicatePlugin(plugin_id));
        }

        plugin.after_init(&self.chart);
        debug!(chart = self.chart.id().0, plugin = %plugin_id, "plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        else {
            return false;
        };
        let mut plugin = self.plugins.remove(position);
        plugin.after_destroy(self.chart.id());
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Typed access to a registered plugin.
    #[must_use]
    pub fn plugin<T: ChartPlugin>(&self, plugin_id: &str) -> Option<&T> {
        self.plugins
            .iter()
            .find(|plugin| plugin.id() == plugin_id)
            .and_then(|plugin| plugin.downcast_ref::<T>())
    }

    #[must_use]
    pub fn plugin_mut<T: ChartPlugin>(&mut self, plugin_id: &str) -> Option<&mut T> {
        self.plugins
            .iter_mut()
            .find(|plugin| plugin.id() == plugin_id)
            .and_then(|plugin| plugin.downcast_mut::<T>())
    }

    pub fn dispatch_event(&mut self, event: PointerEvent) {
        for plugin in &mut self.plugins {
            plugin.after_event(&mut self.chart, &event);
        }
    }

    pub fn draw(&self, canvas: &mut dyn CanvasContext) {
        for plugin in &self.plugins {
            plugin.after_draw(&self.chart, canvas);
        }
    }

    /// Tooltips are drawn only when no plugin vetoes them.
    #[must_use]
    pub fn tooltips_enabled(&self) -> bool {
        self.plugins
            .iter()
            .all(|plugin| plugin.before_tooltip_draw(&self.chart))
    }

    /// Tears the runtime down, notifying plugins, and hands the chart back.
    pub fn into_chart(mut self) -> C {
        let chart_id = self.chart.id();
        for plugin in &mut self.plugins {
            plugin.after_destroy(chart_id);
        }
        self.chart
    }
}
