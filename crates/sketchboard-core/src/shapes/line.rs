//! Line shape.

use super::ShapeTrait;
use kurbo::{Point, Rect, Vec2};

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl ShapeTrait for Line {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// A point is on the line when its distances to both endpoints add up to the
    /// segment length, within `tolerance`.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let detour = point.distance(self.start) + point.distance(self.end) - self.length();
        detour.abs() <= tolerance
    }

    fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    fn halo(&self, padding: f64) -> Rect {
        self.bounds().inflate(padding, padding)
    }
}
