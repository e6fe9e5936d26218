//! Chart plugins built on the hook interface.

mod boxselect;
mod plugins;

pub use boxselect::{BOXSELECT_PLUGIN_ID, BoxSelectPlugin};
pub use plugins::ChartPlugin;
