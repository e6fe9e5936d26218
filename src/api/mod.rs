//! Host-facing configuration and hook dispatch.

mod options;
mod runtime;

pub use options::{BOXSELECT_OPTIONS_POINTER, BoxSelectOptions, SelectOptions};
pub use runtime::ChartRuntime;
