use crate::draw::{Point, PresentationSink};
use crate::input::events::MouseButton;

use super::PadState;

impl<S: PresentationSink> PadState<S> {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate relative to the drawing surface
    /// * `y` - Mouse Y coordinate relative to the drawing surface
    ///
    /// # Behavior
    /// - Left click: starts a circle centered on the pointer
    /// - Right click: cancels the circle being drawn
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => self.begin(Point::new(x, y)),
            MouseButton::Right => self.cancel(),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion; while dragging, the circle edge follows the pointer.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        self.adjust(Point::new(x, y));
    }

    /// Processes mouse button release events.
    ///
    /// Releasing the left button commits the circle with the radius set by the
    /// last motion event.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.commit();
        }
    }
}
