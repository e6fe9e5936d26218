use crate::core::{ChartHost, PixelPoint};
use crate::render::{Color, RectPrimitive};

use super::{Axis, AxisMapper, SelectionDirection};

pub const OVERLAY_LINE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub fill_color: Color,
    pub border_color: Color,
    pub line_width: f64,
}

/// Rectangle shown while a drag is in progress, in pixel space.
///
/// For an X-only selection the rectangle spans the whole Y axis, and for a
/// Y-only selection the whole X axis. Only the spanned axis is resolved; the
/// result is `None` when that scale is missing or not numeric.
#[must_use]
pub fn selection_rect(
    start: PixelPoint,
    pointer: PixelPoint,
    direction: SelectionDirection,
    chart: &dyn ChartHost,
    style: OverlayStyle,
) -> Option<RectPrimitive> {
    let (x, width) = match direction {
        SelectionDirection::Y => AxisMapper::resolve(chart, Axis::X)?.full_extent(),
        _ => (start.x, pointer.x - start.x),
    };
    let (y, height) = match direction {
        SelectionDirection::X => AxisMapper::resolve(chart, Axis::Y)?.full_extent(),
        _ => (start.y, pointer.y - start.y),
    };

    Some(RectPrimitive {
        x,
        y,
        width,
        height,
        fill_color: style.fill_color,
        border_color: style.border_color,
        border_width: style.line_width,
    })
}
