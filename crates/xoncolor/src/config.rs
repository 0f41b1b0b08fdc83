//! Rendering configuration: default color and brightness bounds.
use crate::{
    color::Color,
    error::{ColorError, Result},
};

/// Settings shared by every parse of a [`ColorParser`](crate::ColorParser).
///
/// Invariant: `min_brightness <= max_brightness`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRenderConfig"))]
pub struct RenderConfig {
    default_color: Color,
    min_brightness: u8,
    max_brightness: u8,
}

impl RenderConfig {
    pub fn new(default_color: Color, min_brightness: u8, max_brightness: u8) -> Result<Self> {
        if min_brightness > max_brightness {
            tracing::warn!(
                min_brightness,
                max_brightness,
                "rejecting inverted brightness range"
            );
            return Err(ColorError::InvalidBrightnessRange {
                min: min_brightness,
                max: max_brightness,
            });
        }
        Ok(Self {
            default_color,
            min_brightness,
            max_brightness,
        })
    }

    /// Console defaults: light grey text, kept at least moderately bright for a
    /// black background.
    pub fn console() -> Self {
        Self {
            default_color: Color::rgb(192, 192, 192),
            min_brightness: 80,
            max_brightness: 255,
        }
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    pub fn with_brightness(self, min_brightness: u8, max_brightness: u8) -> Result<Self> {
        Self::new(self.default_color, min_brightness, max_brightness)
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn min_brightness(&self) -> u8 {
        self.min_brightness
    }

    pub fn max_brightness(&self) -> u8 {
        self.max_brightness
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_color: Color::rgb(160, 160, 164),
            min_brightness: 0,
            max_brightness: 255,
        }
    }
}

/// Serialized form: missing keys take their [`RenderConfig::console`] value and
/// brightness values are clamped into `0..=255` before the range itself is
/// validated.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawRenderConfig {
    default_color: Color,
    min_brightness: i64,
    max_brightness: i64,
}

#[cfg(feature = "serde")]
impl Default for RawRenderConfig {
    fn default() -> Self {
        let defaults = RenderConfig::console();
        Self {
            default_color: defaults.default_color,
            min_brightness: defaults.min_brightness.into(),
            max_brightness: defaults.max_brightness.into(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawRenderConfig> for RenderConfig {
    type Error = ColorError;

    fn try_from(raw: RawRenderConfig) -> Result<Self> {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        RenderConfig::new(
            raw.default_color,
            clamp(raw.min_brightness),
            clamp(raw.max_brightness),
        )
    }
}
