//! Shape definitions, the committed frame, and SVG presentation.
//!
//! This module defines the core drawing types used by the pad:
//! - [`Color`]: opaque fill token with a predefined palette
//! - [`Shape`]: a filled circle with a stable [`ShapeId`]
//! - [`Frame`]: committed shapes in drawing order
//! - [`PresentationSink`]: observer receiving add/update/remove notifications
//! - [`SvgSurface`]: sink that renders the visible shapes as SVG

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod sink;

pub use color::Color;
pub use frame::Frame;
pub use render::{RenderError, SvgSurface, render_shape, render_shapes};
pub use shape::{Point, Shape, ShapeId};
pub use sink::{PresentationSink, RecordingSink, SinkEvent};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
