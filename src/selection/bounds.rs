use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Which axes a box selection constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// Rectangle constraining both axes.
    #[default]
    Xy,
    /// Constrains X only; every Y value passes.
    X,
    /// Constrains Y only; every X value passes.
    Y,
}

impl SelectionDirection {
    #[must_use]
    pub fn constrains_x(self) -> bool {
        matches!(self, Self::Xy | Self::X)
    }

    #[must_use]
    pub fn constrains_y(self) -> bool {
        matches!(self, Self::Xy | Self::Y)
    }
}

/// Closed data-space interval with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Orders the endpoints, so drags in either direction give the same interval.
    #[must_use]
    pub fn from_endpoints(a: f64, b: f64) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Data-space bounds of one selection. `None` leaves that axis unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub x_range: Option<Interval>,
    pub y_range: Option<Interval>,
}

impl SelectionBounds {
    /// Builds normalized bounds from two data-space corners.
    #[must_use]
    pub fn from_corners(start: (f64, f64), end: (f64, f64), direction: SelectionDirection) -> Self {
        Self {
            x_range: direction
                .constrains_x()
                .then(|| Interval::from_endpoints(start.0, end.0)),
            y_range: direction
                .constrains_y()
                .then(|| Interval::from_endpoints(start.1, end.1)),
        }
    }

    #[must_use]
    pub fn contains(&self, point: &DataPoint) -> bool {
        let in_x = self.x_range.is_none_or(|range| range.contains(point.x));
        let in_y = self.y_range.is_none_or(|range| range.contains(point.y));
        in_x && in_y
    }
}
