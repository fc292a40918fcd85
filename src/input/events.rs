//! Generic input event types for the pad.

/// Generic key representation.
///
/// Front ends map their native key codes to these values; the pad only
/// cares about modifiers and the keys that can carry a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Maps a key name as written in keybinding strings ("Z", "Escape", "Space").
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }
        match name.to_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "space" => Key::Space,
            _ => Key::Unknown,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifiers and unknown keys.
    pub fn binding_name(self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (draws circles)
    #[default]
    Left,
    /// Right mouse button (cancels the circle being drawn)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_map_to_char_keys() {
        assert_eq!(Key::from_name("Z"), Key::Char('Z'));
        assert_eq!(Key::from_name("+"), Key::Char('+'));
    }

    #[test]
    fn named_keys_are_case_insensitive() {
        assert_eq!(Key::from_name("ESCAPE"), Key::Escape);
        assert_eq!(Key::from_name("delete"), Key::Delete);
        assert_eq!(Key::from_name("F13"), Key::Unknown);
    }

    #[test]
    fn modifiers_have_no_binding_name() {
        assert_eq!(Key::Ctrl.binding_name(), None);
        assert_eq!(Key::Escape.binding_name().as_deref(), Some("Escape"));
    }
}
