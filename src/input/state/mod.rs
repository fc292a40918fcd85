mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;
mod tracker;

pub use self::core::PadState;
pub use tracker::{CommitOutcome, DrawingState, ShapeTracker};
