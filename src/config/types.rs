//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface settings.
///
/// The surface has a fixed size; pointer coordinates are relative to its
/// top-left corner.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 10000)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 10000)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background fill painted under all circles; "none" leaves it transparent
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    /// Background token, or `None` for a transparent surface.
    pub fn background_color(&self) -> Option<Color> {
        if self.background.is_transparent() {
            None
        } else {
            Some(self.background.to_color())
        }
    }
}

/// Drawing-related settings.
///
/// Controls the fill color the picker starts with and how many circles the
/// pad keeps.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial fill color - a named color (red, green, blue, yellow, orange, pink, white, black),
    /// a `#rrggbb` token, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Maximum number of committed circles (0 = unlimited, valid range: 0 - 100000)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            max_shapes: 0,
        }
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    500
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}
