//! chart-boxselect: drag-to-select for 2D scatter and line charts.
//!
//! The crate turns raw pointer events into a drag state, maps the dragged
//! pixel rectangle into data space through the host's axis scales, filters
//! every dataset against it and reports the result through user callbacks.
//! The host chart, its scales and its canvas are consumed through traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod selection;
pub mod telemetry;

pub use api::{BoxSelectOptions, ChartRuntime};
pub use error::{ChartError, ChartResult};
pub use extensions::{BoxSelectPlugin, ChartPlugin};
