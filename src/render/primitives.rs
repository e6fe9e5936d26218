use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};
use crate::render::CanvasContext;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 0..=255 channels and a 0..=1 alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let invalid = |reason: &str| ChartError::InvalidColor {
            input: input.to_owned(),
            reason: reason.to_owned(),
        };

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid("malformed hex notation"));
        }

        let lowered = trimmed.to_ascii_lowercase();
        let (body, expects_alpha) = if let Some(rest) = lowered.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lowered.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid("expected `#hex`, `rgb(...)` or `rgba(...)`"));
        };
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing closing parenthesis"))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid("wrong number of channels"));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| invalid("color channels must be integers in 0..=255"))?;
        }
        let alpha = match parts.get(3) {
            Some(part) => part
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && (0.0..=1.0).contains(value))
                .ok_or_else(|| invalid("alpha must be a number in [0, 1]"))?,
            None => 1.0,
        };

        Ok(Self::from_rgba8(channels[0], channels[1], channels[2], alpha))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let pair = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

    match hex.len() {
        3 | 4 => {
            let short: Vec<u8> = (0..hex.len()).map(digit).collect::<Option<_>>()?;
            let alpha = short.get(3).map_or(1.0, |a| f64::from(a * 17) / 255.0);
            Some(Color::from_rgba8(short[0] * 17, short[1] * 17, short[2] * 17, alpha))
        }
        6 | 8 => {
            let long: Vec<u8> = (0..hex.len()).step_by(2).map(pair).collect::<Option<_>>()?;
            let alpha = long.get(3).map_or(1.0, |a| f64::from(*a) / 255.0);
            Some(Color::from_rgba8(long[0], long[1], long[2], alpha))
        }
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({},{},{},{})",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            self.alpha
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_css(&raw).map_err(serde::de::Error::custom)
    }
}

/// Filled and stroked rectangle in pixel space.
///
/// Width and height may be negative; the rectangle then extends left/up from
/// `(x, y)`, as canvas `rect` does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl RectPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }

    /// Emits the path, fill and stroke calls for this rectangle.
    pub fn paint(self, canvas: &mut dyn CanvasContext) {
        canvas.begin_path();
        canvas.rect(self.x, self.y, self.width, self.height);
        canvas.set_line_width(self.border_width);
        canvas.set_stroke_style(self.border_color);
        canvas.set_fill_style(self.fill_color);
        canvas.fill();
        if self.border_width > 0.0 {
            canvas.stroke();
        }
        canvas.close_path();
    }
}
