//! Circle drawing pad with undo and clear.
//!
//! The [`input::ShapeTracker`] state machine keeps the committed circles and
//! the one being dragged out; [`input::PadState`] maps pointer and key input
//! onto it and reports visible changes to a [`draw::PresentationSink`] such
//! as [`draw::SvgSurface`]. Recorded input can be replayed with [`script`].

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
