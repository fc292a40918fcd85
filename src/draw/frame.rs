//! Frame container holding the committed shapes.

use super::shape::Shape;

/// Committed shapes in drawing order.
///
/// The first entry is the bottom layer and the last entry the top layer.
/// Undo pops from the top (LIFO); clearing hands every entry back so the
/// caller can remove them from whatever surface displays them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Committed shapes, bottom layer first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Attempts to add a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Hands the shape back when the limit would be exceeded.
    pub fn try_add_shape(&mut self, shape: Shape, max: usize) -> Result<(), Shape> {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            Ok(())
        } else {
            Err(shape)
        }
    }

    /// Removes and returns the most recently added shape, if any.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Removes every shape in one step and returns them in drawing order.
    pub fn clear(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.shapes)
    }
}
