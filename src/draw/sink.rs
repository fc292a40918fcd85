//! Presentation sink: the observer that turns tracker effects into visuals.

use super::shape::Shape;

/// Receives shape notifications from the pad.
///
/// Implementations own whatever visual surface the shapes live on. The pad
/// never renders anything itself; it only reports what changed.
pub trait PresentationSink {
    /// A new shape became visible (drawing just started).
    fn shape_added(&mut self, shape: &Shape);

    /// The radius of the shape being drawn changed.
    fn shape_updated(&mut self, shape: &Shape);

    /// The shape should disappear (undo, clear, cancel or overwrite).
    fn shape_removed(&mut self, shape: &Shape);
}

/// One notification delivered to a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Added(Shape),
    Updated(Shape),
    Removed(Shape),
}

/// Sink that keeps every notification in arrival order.
///
/// Handy for asserting on the exact sequence of presentation effects.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded notifications.
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PresentationSink for RecordingSink {
    fn shape_added(&mut self, shape: &Shape) {
        self.events.push(SinkEvent::Added(shape.clone()));
    }

    fn shape_updated(&mut self, shape: &Shape) {
        self.events.push(SinkEvent::Updated(shape.clone()));
    }

    fn shape_removed(&mut self, shape: &Shape) {
        self.events.push(SinkEvent::Removed(shape.clone()));
    }
}
