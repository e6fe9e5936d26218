pub mod chart;
pub mod model;
pub mod scale;
pub mod types;

pub use chart::{
    ChartHost, ChartId, ChartType, DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID, Dataset, DatasetAxes,
};
pub use model::ChartModel;
pub use scale::{AxisScale, LinearScale, ScaleKind};
pub use types::{DataPoint, PixelPoint};
