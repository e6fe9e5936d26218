use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One plotted sample in data space.
///
/// Points may carry arbitrary extra fields next to `x`/`y` (radius, tags,
/// host-specific payloads). They are preserved in insertion order and copied
/// along with the point when it is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// Position in device pixels, relative to the chart canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
