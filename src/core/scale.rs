use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How an axis maps its values, as reported by the host scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    Logarithmic,
    Time,
    /// Discrete labels; pixel positions do not invert to numeric values.
    Category,
}

impl ScaleKind {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Category)
    }
}

/// Host-provided axis scale.
///
/// The box-select layer never does its own pixel math; every conversion goes
/// through this contract.
pub trait AxisScale {
    fn kind(&self) -> ScaleKind;
    fn pixel_for_value(&self, value: f64) -> f64;
    fn value_for_pixel(&self, pixel: f64) -> f64;
    /// Smallest value currently visible on the axis.
    fn min(&self) -> f64;
    /// Largest value currently visible on the axis.
    fn max(&self) -> f64;
}

/// Linear value axis spanning a pixel range.
///
/// `pixel_start` maps to `min` and `pixel_end` maps to `max`; vertical axes
/// usually pass a larger `pixel_start` than `pixel_end` since canvas Y grows
/// downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    min: f64,
    max: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "scale domain must be finite with min < max".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            min,
            max,
            pixel_start,
            pixel_end,
        })
    }

    /// Horizontal axis drawn left to right over `[left, right]`.
    pub fn horizontal(min: f64, max: f64, left: f64, right: f64) -> ChartResult<Self> {
        Self::new(min, max, left, right)
    }

    /// Vertical axis drawn bottom to top over `[top, bottom]`.
    pub fn vertical(min: f64, max: f64, top: f64, bottom: f64) -> ChartResult<Self> {
        Self::new(min, max, bottom, top)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }
}

impl AxisScale for LinearScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        let normalized = (value - self.min) / (self.max - self.min);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    fn value_for_pixel(&self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.min + normalized * (self.max - self.min)
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}
