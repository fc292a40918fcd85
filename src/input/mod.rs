//! Input handling and the drawing state machine.
//!
//! This module translates pointer and keyboard events into tracker
//! operations. [`ShapeTracker`] owns the committed circles and the one under
//! construction; [`PadState`] wraps it with the current fill color, modifier
//! state and key bindings, and reports visible changes to a sink.

pub mod events;
pub mod modifiers;
pub mod state;

pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{CommitOutcome, DrawingState, PadState, ShapeTracker};
