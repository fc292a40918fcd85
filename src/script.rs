//! Gesture scripts: recorded pad input replayed from a file.
//!
//! A script is JSON lines, one event per line. Blank lines and lines starting
//! with `#` are skipped.
//!
//! ```text
//! # draw a circle of radius 5 and take it back
//! {"event": "press", "x": 0, "y": 0}
//! {"event": "motion", "x": 3, "y": 4}
//! {"event": "release"}
//! {"event": "key", "binding": "Ctrl+Z"}
//! ```

use crate::config::KeyBinding;
use crate::draw::PresentationSink;
use crate::input::{MouseButton, PadState};
use crate::util;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One recorded input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Pointer button pressed at a surface position
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer moved while a button may be held
    Motion { x: f64, y: f64 },
    /// Pointer button released
    Release {
        #[serde(default)]
        button: MouseButton,
    },
    /// Key chord such as "Ctrl+Z" or "E"
    Key { binding: String },
    /// Color picker changed (palette name or raw token)
    Color { value: String },
    /// Undo button clicked
    Undo,
    /// Clear button clicked
    Clear,
}

/// Errors raised while loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid keybinding on line {line}: {message}")]
    Binding { line: usize, message: String },
}

/// Parses a gesture script from text.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: ScriptEvent = serde_json::from_str(trimmed)
            .map_err(|source| ScriptError::Parse { line, source })?;

        // Reject bad chords up front rather than halfway through a replay.
        if let ScriptEvent::Key { binding } = &event {
            KeyBinding::parse(binding)
                .map_err(|message| ScriptError::Binding { line, message })?;
        }

        events.push(event);
    }

    debug!("Parsed {} script event(s)", events.len());
    Ok(events)
}

/// Reads and parses a gesture script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let text = fs::read_to_string(path)?;
    let events = parse_script(&text)?;
    info!("Loaded {} event(s) from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds events into the pad in order.
pub fn replay<S: PresentationSink>(events: &[ScriptEvent], pad: &mut PadState<S>) {
    for event in events {
        match event {
            ScriptEvent::Press { x, y, button } => pad.on_mouse_press(*button, *x, *y),
            ScriptEvent::Motion { x, y } => pad.on_mouse_motion(*x, *y),
            ScriptEvent::Release { button } => pad.on_mouse_release(*button),
            ScriptEvent::Key { binding } => match KeyBinding::parse(binding) {
                Ok(binding) => pad.press_binding(&binding),
                Err(err) => debug!("Skipping key event: {err}"),
            },
            ScriptEvent::Color { value } => pad.set_color(util::parse_color(value)),
            ScriptEvent::Undo => pad.undo(),
            ScriptEvent::Clear => pad.clear(),
        }
    }
}
