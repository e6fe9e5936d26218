use indexmap::IndexMap;
use serde_json::Value;

use crate::core::chart::{ChartHost, ChartId, ChartType, Dataset};
use crate::core::scale::AxisScale;

/// In-memory chart used by headless hosts and tests.
///
/// Scales are keyed by axis id in insertion order, the same way a host keeps
/// its `scales` table. Redraw requests are only counted.
pub struct ChartModel {
    id: ChartId,
    chart_type: ChartType,
    datasets: Vec<Dataset>,
    scales: IndexMap<String, Box<dyn AxisScale>>,
    x_axis_ids: Vec<String>,
    options: Value,
    redraw_requests: usize,
}

impl ChartModel {
    #[must_use]
    pub fn new(id: ChartId, chart_type: ChartType) -> Self {
        Self {
            id,
            chart_type,
            datasets: Vec::new(),
            scales: IndexMap::new(),
            x_axis_ids: Vec::new(),
            options: Value::Null,
            redraw_requests: 0,
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Registers a horizontal axis.
    #[must_use]
    pub fn with_x_scale(mut self, axis_id: impl Into<String>, scale: impl AxisScale + 'static) -> Self {
        let axis_id = axis_id.into();
        if !self.x_axis_ids.contains(&axis_id) {
            self.x_axis_ids.push(axis_id.clone());
        }
        self.scales.insert(axis_id, Box::new(scale));
        self
    }

    /// Registers a vertical axis.
    #[must_use]
    pub fn with_y_scale(mut self, axis_id: impl Into<String>, scale: impl AxisScale + 'static) -> Self {
        self.scales.insert(axis_id.into(), Box::new(scale));
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    pub fn set_datasets(&mut self, datasets: Vec<Dataset>) {
        self.datasets = datasets;
    }

    pub fn set_options(&mut self, options: Value) {
        self.options = options;
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }
}

impl ChartHost for ChartModel {
    fn id(&self) -> ChartId {
        self.id
    }

    fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    fn has_x_axis(&self) -> bool {
        !self.x_axis_ids.is_empty()
    }

    fn scale(&self, axis_id: &str) -> Option<&dyn AxisScale> {
        self.scales.get(axis_id).map(|scale| scale.as_ref())
    }

    fn options(&self) -> &Value {
        &self.options
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
