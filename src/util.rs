//! Utility functions for color lookup and geometry.
//!
//! This module provides:
//! - Name-to-color mapping for config files and key shortcuts
//! - Euclidean distance for sizing circles

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry
// ============================================================================

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to palette colors.
///
/// Used by the configuration system and the script's `color` event.
/// Matching is case-insensitive.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a color token back to its palette name, or "Custom".
///
/// Comparison ignores ASCII case so `#FF0000` is still reported as red.
pub fn color_to_name(color: &Color) -> &'static str {
    let named = [
        (RED, "Red"),
        (GREEN, "Green"),
        (BLUE, "Blue"),
        (YELLOW, "Yellow"),
        (ORANGE, "Orange"),
        (PINK, "Pink"),
        (WHITE, "White"),
        (BLACK, "Black"),
    ];

    named
        .into_iter()
        .find(|(known, _)| known.as_str().eq_ignore_ascii_case(color.as_str()))
        .map_or("Custom", |(_, name)| name)
}

/// Resolves a user-supplied color: a palette name, otherwise the raw token.
pub fn parse_color(value: &str) -> Color {
    let value = value.trim();
    name_to_color(value).unwrap_or_else(|| Color::new(value))
}
