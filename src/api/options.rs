use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ChartResult;
use crate::render::Color;
use crate::selection::{OVERLAY_LINE_WIDTH, OverlayStyle, SelectionDirection};

/// Location of the plugin options inside the chart options tree.
pub const BOXSELECT_OPTIONS_POINTER: &str = "/plugins/boxselect";

/// `select` options block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptions {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub direction: SelectionDirection,
    #[serde(default = "default_selectbox_background_color")]
    pub selectbox_background_color: Color,
    #[serde(default = "default_selectbox_border_color")]
    pub selectbox_border_color: Color,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            direction: SelectionDirection::default(),
            selectbox_background_color: default_selectbox_background_color(),
            selectbox_border_color: default_selectbox_border_color(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_selectbox_background_color() -> Color {
    Color::from_rgba8(66, 133, 244, 0.2)
}

fn default_selectbox_border_color() -> Color {
    Color::from_rgba8(0x44, 0x88, 0xff, 1.0)
}

/// Box-select options as found under `plugins.boxselect`.
///
/// Serializable so hosts can persist them next to their own chart options.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxSelectOptions {
    #[serde(default)]
    pub select: SelectOptions,
}

impl BoxSelectOptions {
    /// Reads options from a full chart options tree.
    ///
    /// Each field is looked up on its own; a missing or malformed value falls
    /// back to that field's default without affecting the others.
    #[must_use]
    pub fn from_chart_options(options: &Value) -> Self {
        let defaults = SelectOptions::default();
        Self {
            select: SelectOptions {
                enabled: lookup(options, "enabled", defaults.enabled),
                direction: lookup(options, "direction", defaults.direction),
                selectbox_background_color: lookup(
                    options,
                    "selectboxBackgroundColor",
                    defaults.selectbox_background_color,
                ),
                selectbox_border_color: lookup(
                    options,
                    "selectboxBorderColor",
                    defaults.selectbox_border_color,
                ),
            },
        }
    }

    /// Strict parse of a standalone options document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_value(&self) -> ChartResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    #[must_use]
    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            fill_color: self.select.selectbox_background_color,
            border_color: self.select.selectbox_border_color,
            line_width: OVERLAY_LINE_WIDTH,
        }
    }
}

fn lookup<T: DeserializeOwned>(options: &Value, name: &str, default: T) -> T {
    let pointer = format!("{BOXSELECT_OPTIONS_POINTER}/select/{name}");
    match options.pointer(&pointer) {
        None | Some(Value::Null) => default,
        Some(raw) => T::deserialize(raw).unwrap_or_else(|err| {
            warn!(option = name, error = %err, "invalid box-select option, using default");
            default
        }),
    }
}
