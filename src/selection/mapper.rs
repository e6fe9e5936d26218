use tracing::debug;

use crate::core::{AxisScale, ChartHost, PixelPoint};
use crate::interaction::CompletedDrag;

use super::{SelectionBounds, SelectionDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Pixel/value adapter over one numeric host scale.
#[derive(Clone, Copy)]
pub struct AxisMapper<'a> {
    scale: &'a dyn AxisScale,
}

impl<'a> AxisMapper<'a> {
    /// Resolves the first dataset's scale for `axis`.
    ///
    /// Returns `None` when the chart has no datasets, the scale is missing or
    /// not numeric.
    #[must_use]
    pub fn resolve(chart: &'a dyn ChartHost, axis: Axis) -> Option<Self> {
        let axes = chart.dataset_axes(0)?;
        let axis_id = match axis {
            Axis::X => &axes.x_axis_id,
            Axis::Y => &axes.y_axis_id,
        };
        let scale = chart.scale(axis_id)?;

        if !scale.kind().is_numeric() {
            debug!(
                chart = chart.id().0,
                axis_id = %axis_id,
                kind = ?scale.kind(),
                "first dataset uses a non-numeric scale"
            );
            return None;
        }

        Some(Self { scale })
    }

    #[must_use]
    pub fn scale(&self) -> &'a dyn AxisScale {
        self.scale
    }

    #[must_use]
    pub fn pixel_to_value(&self, pixel: f64) -> f64 {
        self.scale.value_for_pixel(pixel)
    }

    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.scale.pixel_for_value(value)
    }

    /// Pixel span `(pixel(max), pixel(min) - pixel(max))` of the whole axis.
    #[must_use]
    pub fn full_extent(&self) -> (f64, f64) {
        let start = self.value_to_pixel(self.scale.max());
        let end = self.value_to_pixel(self.scale.min());
        (start, end - start)
    }
}

impl std::fmt::Debug for AxisMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisMapper")
            .field("kind", &self.scale.kind())
            .field("min", &self.scale.min())
            .field("max", &self.scale.max())
            .finish()
    }
}

/// Both axis mappers of a chart's first dataset.
///
/// All datasets are mapped through the first dataset's axes, even when later
/// datasets are plotted against different scales.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    x: AxisMapper<'a>,
    y: AxisMapper<'a>,
}

impl<'a> CoordinateMapper<'a> {
    /// Returns `None` unless both scales resolve.
    #[must_use]
    pub fn resolve(chart: &'a dyn ChartHost) -> Option<Self> {
        Some(Self {
            x: AxisMapper::resolve(chart, Axis::X)?,
            y: AxisMapper::resolve(chart, Axis::Y)?,
        })
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> AxisMapper<'a> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[must_use]
    pub fn pixel_to_value(&self, axis: Axis, pixel: f64) -> f64 {
        self.axis(axis).pixel_to_value(pixel)
    }

    #[must_use]
    pub fn value_to_pixel(&self, axis: Axis, value: f64) -> f64 {
        self.axis(axis).value_to_pixel(value)
    }

    #[must_use]
    pub fn point_to_values(&self, point: PixelPoint) -> (f64, f64) {
        (
            self.pixel_to_value(Axis::X, point.x),
            self.pixel_to_value(Axis::Y, point.y),
        )
    }

    /// Data-space bounds covered by a finished drag.
    #[must_use]
    pub fn bounds_for_drag(&self, drag: CompletedDrag, direction: SelectionDirection) -> SelectionBounds {
        SelectionBounds::from_corners(
            self.point_to_values(drag.start),
            self.point_to_values(drag.end),
            direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisMapper, CoordinateMapper};
    use crate::core::{
        ChartId, ChartModel, ChartType, DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID, DataPoint, Dataset,
        LinearScale,
    };
    use approx::assert_abs_diff_eq;

    fn chart() -> ChartModel {
        ChartModel::new(ChartId(1), ChartType::Scatter)
            .with_x_scale(
                DEFAULT_X_AXIS_ID,
                LinearScale::horizontal(0.0, 10.0, 0.0, 100.0).expect("x scale"),
            )
            .with_y_scale(
                DEFAULT_Y_AXIS_ID,
                LinearScale::vertical(-5.0, 5.0, 20.0, 220.0).expect("y scale"),
            )
            .with_dataset(Dataset::new(vec![DataPoint::new(1.0, 1.0)]))
    }

    #[test]
    fn value_and_pixel_conversions_invert_each_other() {
        let chart = chart();
        let mapper = CoordinateMapper::resolve(&chart).expect("mapper");

        assert_abs_diff_eq!(mapper.value_to_pixel(Axis::X, 5.0), 50.0);
        assert_abs_diff_eq!(mapper.value_to_pixel(Axis::Y, 5.0), 20.0);
        assert_abs_diff_eq!(mapper.value_to_pixel(Axis::Y, -5.0), 220.0);
        for value in [-5.0, -1.25, 0.0, 3.5, 5.0] {
            let pixel = mapper.value_to_pixel(Axis::Y, value);
            assert_abs_diff_eq!(mapper.pixel_to_value(Axis::Y, pixel), value, epsilon = 1e-12);
        }
        let (x, y) = mapper.point_to_values(crate::core::PixelPoint::new(25.0, 120.0));
        assert_abs_diff_eq!(x, 2.5);
        assert_abs_diff_eq!(y, 0.0);
    }

    #[test]
    fn full_extent_runs_from_max_pixel_towards_min_pixel() {
        let chart = chart();
        let x = AxisMapper::resolve(&chart, Axis::X).expect("x mapper");
        let y = AxisMapper::resolve(&chart, Axis::Y).expect("y mapper");

        assert_eq!(x.full_extent(), (100.0, -100.0));
        assert_eq!(y.full_extent(), (20.0, 200.0));
    }

    #[test]
    fn missing_dataset_leaves_nothing_to_resolve() {
        let chart = ChartModel::new(ChartId(1), ChartType::Scatter).with_x_scale(
            DEFAULT_X_AXIS_ID,
            LinearScale::horizontal(0.0, 10.0, 0.0, 100.0).expect("x scale"),
        );

        assert!(AxisMapper::resolve(&chart, Axis::X).is_none());
        assert!(CoordinateMapper::resolve(&chart).is_none());
    }
}
