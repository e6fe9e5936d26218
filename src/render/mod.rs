mod canvas;
mod primitives;

pub use canvas::{CanvasCommand, CanvasContext, RecordingCanvas};
pub use primitives::{Color, RectPrimitive};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoCanvas;
