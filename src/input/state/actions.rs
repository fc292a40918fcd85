use crate::config::{Action, KeyBinding};
use crate::draw::{PresentationSink, color::*};
use crate::input::{events::Key, modifiers::Modifiers};
use log::debug;

use super::PadState;

impl<S: PresentationSink> PadState<S> {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Every other key is looked
    /// up in the action map together with the held modifiers.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        match self.find_action(&key_str) {
            Some(action) => self.handle_action(action),
            None => debug!("No action bound to {key_str} ({:?})", self.modifiers),
        }
    }

    /// Processes a key release event (only modifiers matter).
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Presses a whole chord such as `Ctrl+Z` as if typed.
    ///
    /// The modifiers held before the chord are restored afterwards.
    pub fn press_binding(&mut self, binding: &KeyBinding) {
        let held = self.modifiers;
        self.modifiers = Modifiers {
            shift: binding.shift,
            ctrl: binding.ctrl,
            alt: binding.alt,
        };
        self.on_key_press(Key::from_name(&binding.key));
        self.modifiers = held;
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Cancel => self.cancel(),
            Action::Undo => self.undo(),
            Action::ClearCanvas => self.clear(),
            Action::SetColorRed => self.set_color(RED),
            Action::SetColorGreen => self.set_color(GREEN),
            Action::SetColorBlue => self.set_color(BLUE),
            Action::SetColorYellow => self.set_color(YELLOW),
            Action::SetColorOrange => self.set_color(ORANGE),
            Action::SetColorPink => self.set_color(PINK),
            Action::SetColorWhite => self.set_color(WHITE),
            Action::SetColorBlack => self.set_color(BLACK),
        }
    }
}
