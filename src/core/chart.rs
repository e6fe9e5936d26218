use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::scale::AxisScale;
use crate::core::types::DataPoint;

pub const DEFAULT_X_AXIS_ID: &str = "x-axis-0";
pub const DEFAULT_Y_AXIS_ID: &str = "y-axis-0";

/// Stable identifier the host assigns to each chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChartId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Line,
    Scatter,
    Bar,
    HorizontalBar,
    Bubble,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
}

impl ChartType {
    /// Box selection needs numeric values on both axes of the first dataset.
    #[must_use]
    pub fn supports_box_select(self) -> bool {
        matches!(self, Self::Line | Self::Scatter)
    }
}

/// Axis identifiers a dataset is plotted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetAxes {
    pub x_axis_id: String,
    pub y_axis_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    /// Optional per-point labels, aligned with `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default = "default_x_axis_id")]
    pub x_axis_id: String,
    #[serde(default = "default_y_axis_id")]
    pub y_axis_id: String,
}

fn default_x_axis_id() -> String {
    DEFAULT_X_AXIS_ID.to_owned()
}

fn default_y_axis_id() -> String {
    DEFAULT_Y_AXIS_ID.to_owned()
}

impl Dataset {
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            label: None,
            data,
            labels: None,
            x_axis_id: default_x_axis_id(),
            y_axis_id: default_y_axis_id(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_point_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis_id: impl Into<String>, y_axis_id: impl Into<String>) -> Self {
        self.x_axis_id = x_axis_id.into();
        self.y_axis_id = y_axis_id.into();
        self
    }

    #[must_use]
    pub fn axes(&self) -> DatasetAxes {
        DatasetAxes {
            x_axis_id: self.x_axis_id.clone(),
            y_axis_id: self.y_axis_id.clone(),
        }
    }
}

/// Read/redraw surface of the host chart instance.
///
/// The host owns the chart; the box-select layer only borrows it inside hook
/// calls and never keeps a reference past the call.
pub trait ChartHost {
    fn id(&self) -> ChartId;
    fn chart_type(&self) -> ChartType;
    fn datasets(&self) -> &[Dataset];
    /// Whether at least one X axis is configured on the chart.
    fn has_x_axis(&self) -> bool;
    fn scale(&self, axis_id: &str) -> Option<&dyn AxisScale>;
    /// Full chart options tree.
    fn options(&self) -> &Value;
    fn request_redraw(&mut self);

    /// Axis assignment for the dataset at `index`.
    fn dataset_axes(&self, index: usize) -> Option<DatasetAxes> {
        self.datasets().get(index).map(Dataset::axes)
    }
}
