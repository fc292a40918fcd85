//! Pad controller: the tracker plus the input context around it.

use super::tracker::{CommitOutcome, ShapeTracker};
use crate::config::{Action, KeyBinding};
use crate::draw::{Color, Point, PresentationSink};
use crate::input::modifiers::Modifiers;
use crate::util;
use log::info;
use std::collections::HashMap;

/// Main pad state owning the tracker and the presentation sink.
///
/// Input handlers (mouse, keys, picker, buttons) all go through this struct,
/// which applies the tracker operation and then forwards the visible effect to
/// the sink. There is no other owner of drawing state.
pub struct PadState<S: PresentationSink> {
    /// Committed shapes plus the circle under construction
    tracker: ShapeTracker,
    /// Where visual effects are delivered
    sink: S,
    /// Fill color for the next circle (changed with the picker or color keys)
    pub current_color: Color,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl<S: PresentationSink> PadState<S> {
    /// Creates an idle pad.
    ///
    /// # Arguments
    /// * `sink` - Receives add/update/remove notifications
    /// * `color` - Initial fill color
    /// * `max_shapes` - Committed shape limit (0 = unlimited)
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        sink: S,
        color: Color,
        max_shapes: usize,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            tracker: ShapeTracker::with_limit(max_shapes),
            sink,
            current_color: color,
            modifiers: Modifiers::new(),
            action_map,
        }
    }

    pub fn tracker(&self) -> &ShapeTracker {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the pad, returning the sink (e.g. to serialise the final surface).
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Changes the fill color used by the next circle.
    ///
    /// A circle already being drawn keeps the color it started with.
    pub fn set_color(&mut self, color: Color) {
        info!(
            "Fill color set to {} ({})",
            util::color_to_name(&color),
            color
        );
        self.current_color = color;
    }

    /// Starts a circle at `point` using the current color.
    pub fn begin(&mut self, point: Point) {
        if let Some(discarded) = self.tracker.begin(point, self.current_color.clone()) {
            self.sink.shape_removed(&discarded);
        }
        if let Some(shape) = self.tracker.in_progress() {
            self.sink.shape_added(shape);
        }
    }

    /// Resizes the circle being drawn; ignored when idle.
    pub fn adjust(&mut self, point: Point) {
        if let Some(shape) = self.tracker.adjust(point) {
            self.sink.shape_updated(shape);
        }
    }

    /// Finalizes the circle being drawn; ignored when idle.
    pub fn commit(&mut self) {
        match self.tracker.commit() {
            CommitOutcome::Committed(_) => {}
            CommitOutcome::Rejected(shape) => self.sink.shape_removed(&shape),
            CommitOutcome::NotDrawing => {}
        }
    }

    /// Drops the circle being drawn without committing it.
    pub fn cancel(&mut self) {
        if let Some(shape) = self.tracker.cancel() {
            self.sink.shape_removed(&shape);
        }
    }

    /// Removes the most recently committed circle (the Undo button).
    pub fn undo(&mut self) {
        if let Some(shape) = self.tracker.undo_last() {
            self.sink.shape_removed(&shape);
        }
    }

    /// Removes every committed circle (the Clear button).
    pub fn clear(&mut self) {
        for shape in self.tracker.clear_all() {
            self.sink.shape_removed(&shape);
        }
    }

    /// Looks up the action bound to `key_str` under the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }
}
