//! Configuration file support for circlepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/circlepad/config.toml` (or a path given on the command line).
//! Settings include the drawing surface, the initial fill color, the shape limit and
//! keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_EDGE: u32 = 10_000;
const MAX_SHAPES_LIMIT: usize = 100_000;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 500
/// background = "white"
///
/// [drawing]
/// default_color = "#ff0000"
/// max_shapes = 0
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// clear_canvas = ["E"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Fill color defaults and shape limit
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 10000
    /// - `drawing.max_shapes`: 0 - 100000
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        if self.drawing.max_shapes > MAX_SHAPES_LIMIT {
            log::warn!(
                "Invalid max_shapes {}, clamping to {MAX_SHAPES_LIMIT}",
                self.drawing.max_shapes
            );
            self.drawing.max_shapes = MAX_SHAPES_LIMIT;
        }
    }

    /// Returns the path to the default configuration file.
    ///
    /// The config file is located at `~/.config/circlepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("circlepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, color::*};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 500);
        assert_eq!(config.canvas.background_color(), Some(WHITE));
        assert_eq!(config.drawing.default_color.to_color(), RED);
        assert_eq!(config.drawing.max_shapes, 0);
        assert_eq!(config.keybindings.undo, vec!["Ctrl+Z".to_string()]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 50000

            [drawing]
            max_shapes = 1000000
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
        assert_eq!(config.drawing.max_shapes, MAX_SHAPES_LIMIT);
    }

    #[test]
    fn colors_accept_names_tokens_and_rgb() {
        let config = Config::from_toml(
            r#"
            [canvas]
            background = "none"

            [drawing]
            default_color = [0, 128, 255]
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.background_color(), None);
        assert_eq!(
            config.drawing.default_color.to_color(),
            Color::new("#0080ff")
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[canvas\nwidth = 3").is_err());
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas]\nwidth = 320\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 500);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").expect("object schema");
        for section in ["canvas", "drawing", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
