//! Shape tracker: the committed frame plus the circle under construction.

use crate::draw::{Color, Frame, Point, Shape, ShapeId};
use log::{debug, warn};

/// Two-state drawing machine.
///
/// The in-progress shape lives inside the `Drawing` variant, so it exists
/// exactly when a drag is underway.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No drag in progress
    Idle,
    /// A circle is being sized by pointer motion
    Drawing {
        /// The circle under construction (not yet committed)
        shape: Shape,
    },
}

/// What happened when the in-progress shape was committed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The shape was appended to the frame.
    Committed(ShapeId),
    /// The frame is at its shape limit; the shape was dropped.
    Rejected(Shape),
    /// Nothing was being drawn.
    NotDrawing,
}

/// Owns the committed shapes and at most one shape under construction.
///
/// Every operation is total: calls that make no sense in the current state
/// are no-ops rather than errors.
#[derive(Debug)]
pub struct ShapeTracker {
    state: DrawingState,
    frame: Frame,
    next_id: u64,
    /// Maximum number of committed shapes (0 = unlimited)
    max_shapes: usize,
}

impl Default for ShapeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeTracker {
    /// Creates an idle tracker with no shape limit.
    pub fn new() -> Self {
        Self::with_limit(0)
    }

    /// Creates an idle tracker that keeps at most `max_shapes` committed shapes
    /// (0 = unlimited).
    pub fn with_limit(max_shapes: usize) -> Self {
        Self {
            state: DrawingState::Idle,
            frame: Frame::new(),
            next_id: 1,
            max_shapes,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// The shape under construction, if a drag is in progress.
    pub fn in_progress(&self) -> Option<&Shape> {
        match &self.state {
            DrawingState::Drawing { shape } => Some(shape),
            DrawingState::Idle => None,
        }
    }

    /// Committed shapes in drawing order.
    pub fn committed(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// Starts a new zero-radius circle at `point`.
    ///
    /// If a circle was already being drawn it is dropped without being
    /// committed and handed back so the caller can clear it from view.
    pub fn begin(&mut self, point: Point, color: Color) -> Option<Shape> {
        let id = ShapeId(self.next_id);
        self.next_id += 1;

        let shape = Shape::new(id, point, color);
        debug!(
            "Begin shape {:?} at ({}, {}) fill {}",
            id, point.x, point.y, shape.fill
        );

        match std::mem::replace(&mut self.state, DrawingState::Drawing { shape }) {
            DrawingState::Drawing { shape: discarded } => {
                debug!("Discarding uncommitted shape {:?}", discarded.id);
                Some(discarded)
            }
            DrawingState::Idle => None,
        }
    }

    /// Resizes the in-progress circle so its edge passes through `point`.
    ///
    /// Returns the updated shape, or `None` when idle.
    pub fn adjust(&mut self, point: Point) -> Option<&Shape> {
        match &mut self.state {
            DrawingState::Drawing { shape } => {
                shape.resize_to(point);
                Some(&*shape)
            }
            DrawingState::Idle => None,
        }
    }

    /// Moves the in-progress circle into the committed frame.
    pub fn commit(&mut self) -> CommitOutcome {
        let shape = match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing { shape } => shape,
            DrawingState::Idle => return CommitOutcome::NotDrawing,
        };

        let id = shape.id;
        match self.frame.try_add_shape(shape, self.max_shapes) {
            Ok(()) => {
                debug!("Committed shape {:?} ({} total)", id, self.frame.len());
                CommitOutcome::Committed(id)
            }
            Err(rejected) => {
                warn!(
                    "Shape limit ({}) reached; discarding new shape",
                    self.max_shapes
                );
                CommitOutcome::Rejected(rejected)
            }
        }
    }

    /// Abandons the in-progress circle without committing it.
    pub fn cancel(&mut self) -> Option<Shape> {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing { shape } => Some(shape),
            DrawingState::Idle => None,
        }
    }

    /// Removes and returns the most recently committed shape.
    pub fn undo_last(&mut self) -> Option<Shape> {
        let undone = self.frame.undo();
        if let Some(shape) = &undone {
            debug!("Undid shape {:?}", shape.id);
        }
        undone
    }

    /// Removes every committed shape and returns them in drawing order.
    ///
    /// A circle that is still being drawn is left alone.
    pub fn clear_all(&mut self) -> Vec<Shape> {
        let removed = self.frame.clear();
        debug!("Cleared {} committed shape(s)", removed.len());
        removed
    }
}
