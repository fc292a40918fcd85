//! Shape definitions for the drawing pad.

use super::color::Color;
use crate::util;

/// A position on the drawing surface, relative to its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset in surface units
    pub x: f64,
    /// Vertical offset in surface units
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Point) -> f64 {
        util::distance(self.x, self.y, other.x, other.y)
    }
}

/// Stable reference to a shape, assigned by the tracker when drawing begins.
///
/// Presentation sinks use it to locate the element to resize or remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

/// A filled circle on the pad.
///
/// Created with radius 0 when a drag starts. Only the radius changes while the
/// drag continues; once committed the shape is never modified again.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Tracker-assigned reference
    pub id: ShapeId,
    /// Where the drag started
    pub center: Point,
    /// Distance from the center to the latest pointer position (never negative)
    pub radius: f64,
    /// Fill color token captured at drag start
    pub fill: Color,
}

impl Shape {
    /// Creates a zero-radius shape at `center`.
    pub fn new(id: ShapeId, center: Point, fill: Color) -> Self {
        Self {
            id,
            center,
            radius: 0.0,
            fill,
        }
    }

    /// Recomputes the radius so the circle edge passes through `point`.
    ///
    /// Only the latest point matters; earlier adjustments leave no trace.
    pub(crate) fn resize_to(&mut self, point: Point) {
        self.radius = self.center.distance_to(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn new_shape_starts_with_zero_radius() {
        let shape = Shape::new(ShapeId(1), Point::new(10.0, 20.0), RED);
        assert_eq!(shape.radius, 0.0);
        assert_eq!(shape.center, Point::new(10.0, 20.0));
    }

    #[test]
    fn resize_uses_latest_point_only() {
        let mut shape = Shape::new(ShapeId(1), Point::new(0.0, 0.0), RED);
        shape.resize_to(Point::new(30.0, 40.0));
        assert_eq!(shape.radius, 50.0);
        shape.resize_to(Point::new(3.0, 4.0));
        assert_eq!(shape.radius, 5.0);
    }

    #[test]
    fn resize_handles_points_left_of_center() {
        let mut shape = Shape::new(ShapeId(7), Point::new(10.0, 10.0), RED);
        shape.resize_to(Point::new(4.0, 2.0));
        assert_eq!(shape.radius, 10.0);
    }
}
