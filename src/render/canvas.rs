use crate::render::Color;

/// Canvas-style drawing surface provided by the host.
///
/// Mirrors the subset of the 2D canvas API the selection overlay needs: path
/// construction, style assignment and fill/stroke.
pub trait CanvasContext {
    fn begin_path(&mut self);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_style(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn close_path(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    BeginPath,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetLineWidth(f64),
    SetStrokeStyle(Color),
    SetFillStyle(Color),
    Fill,
    Stroke,
    ClosePath,
}

/// Canvas that records calls instead of drawing.
///
/// Used by headless hosts and tests to inspect what the overlay emitted.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Rectangles appended to a path, in call order.
    #[must_use]
    pub fn rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                CanvasCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                } => Some((x, y, width, height)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl CanvasContext for RecordingCanvas {
    fn begin_path(&mut self) {
        self.commands.push(CanvasCommand::BeginPath);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(CanvasCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(CanvasCommand::SetLineWidth(width));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(CanvasCommand::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(CanvasCommand::SetFillStyle(color));
    }

    fn fill(&mut self) {
        self.commands.push(CanvasCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(CanvasCommand::Stroke);
    }

    fn close_path(&mut self) {
        self.commands.push(CanvasCommand::ClosePath);
    }
}
