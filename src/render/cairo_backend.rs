use cairo::Context;
use tracing::warn;

use crate::render::{CanvasContext, Color};

/// `CanvasContext` over an external Cairo context (for example a GTK
/// `DrawingArea` draw callback).
///
/// Cairo has a single source color, so fill and stroke styles are kept here and
/// applied right before the matching operation. Fill and stroke preserve the
/// path, matching canvas semantics.
#[derive(Debug)]
pub struct CairoCanvas<'a> {
    context: &'a Context,
    fill_color: Color,
    stroke_color: Color,
}

impl<'a> CairoCanvas<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl CanvasContext for CairoCanvas<'_> {
    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rectangle(x, y, width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill(&mut self) {
        self.apply_color(self.fill_color);
        if let Err(err) = self.context.fill_preserve() {
            warn!(error = %err, "cairo fill failed");
        }
    }

    fn stroke(&mut self) {
        self.apply_color(self.stroke_color);
        if let Err(err) = self.context.stroke_preserve() {
            warn!(error = %err, "cairo stroke failed");
        }
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }
}
