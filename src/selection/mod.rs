//! Selection geometry: data-space bounds, pixel mapping, dataset filtering and
//! the drag overlay.

mod bounds;
mod callbacks;
mod engine;
mod filter;
mod mapper;
mod overlay;
mod session;

pub use bounds::{Interval, SelectionBounds, SelectionDirection};
pub use callbacks::{AfterSelectFn, BeforeSelectFn, SelectCallbacks};
pub use engine::{SelectionOutcome, finalize_drag};
pub use filter::{SelectedDataset, filter_dataset, filter_datasets};
pub use mapper::{Axis, AxisMapper, CoordinateMapper};
pub use overlay::{OVERLAY_LINE_WIDTH, OverlayStyle, selection_rect};
pub use session::SelectionSession;
