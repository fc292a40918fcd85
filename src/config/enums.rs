//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a raw token, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex token, passed through untouched
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or a `#rrggbb` token
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] token.
    ///
    /// Named colors map to the palette; strings starting with `#` are kept as
    /// given. Anything else defaults to red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                if name.trim().starts_with('#') {
                    Color::new(name.trim())
                } else {
                    warn!("Unknown color '{}', using red", name);
                    RED
                }
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb(*r, *g, *b),
        }
    }

    /// Whether this color means no fill at all (`"none"` / `"transparent"`).
    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorSpec::Name(name) if matches!(
            name.trim().to_lowercase().as_str(),
            "none" | "transparent"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, ORANGE};

    #[test]
    fn named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Rgb([255, 128, 0]).to_color(), ORANGE);
    }

    #[test]
    fn hex_tokens_pass_through() {
        assert_eq!(
            ColorSpec::Name("#1E90FF".into()).to_color(),
            Color::new("#1E90FF")
        );
    }

    #[test]
    fn unknown_names_fall_back_to_red() {
        assert_eq!(ColorSpec::Name("chartreuse-ish".into()).to_color(), RED);
    }

    #[test]
    fn transparent_specs_are_detected() {
        assert!(ColorSpec::Name("None".into()).is_transparent());
        assert!(!ColorSpec::Name("white".into()).is_transparent());
        assert!(!ColorSpec::Rgb([0, 0, 0]).is_transparent());
    }
}
