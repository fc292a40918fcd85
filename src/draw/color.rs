//! Fill color tokens and the predefined palette.

use std::borrow::Cow;
use std::fmt;

/// Opaque fill color token attached to every shape (e.g. `#ff0000`).
///
/// The tracker never interprets the token; it is handed to the presentation
/// layer verbatim. Helpers exist for building tokens from RGB components so
/// config files and key shortcuts can produce consistent hex codes.
///
/// # Examples
///
/// ```
/// use circlepad::draw::Color;
/// let orange = Color::from_rgb(255, 128, 0);
/// assert_eq!(orange.as_str(), "#ff8000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Wraps an arbitrary token without validation.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    /// Builds a lowercase `#rrggbb` token.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

const fn palette(token: &'static str) -> Color {
    Color(Cow::Borrowed(token))
}

// ============================================================================
// Predefined palette (matches the color picker's quick swatches)
// ============================================================================

/// Predefined red (`#ff0000`), also the picker's initial value
pub const RED: Color = palette("#ff0000");

/// Predefined green (`#00ff00`)
pub const GREEN: Color = palette("#00ff00");

/// Predefined blue (`#0000ff`)
pub const BLUE: Color = palette("#0000ff");

/// Predefined yellow (`#ffff00`)
pub const YELLOW: Color = palette("#ffff00");

/// Predefined orange (`#ff8000`)
pub const ORANGE: Color = palette("#ff8000");

/// Predefined pink/magenta (`#ff00ff`)
pub const PINK: Color = palette("#ff00ff");

/// Predefined white (`#ffffff`)
pub const WHITE: Color = palette("#ffffff");

/// Predefined black (`#000000`)
pub const BLACK: Color = palette("#000000");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_and_borrowed_tokens_compare_equal() {
        assert_eq!(Color::new("#ff0000"), RED);
        assert_eq!(Color::from_rgb(0, 0, 255), BLUE);
    }

    #[test]
    fn arbitrary_tokens_are_kept_verbatim() {
        let token = Color::from("rgb(1, 2, 3)");
        assert_eq!(token.as_str(), "rgb(1, 2, 3)");
        assert_eq!(token.to_string(), "rgb(1, 2, 3)");
    }
}
