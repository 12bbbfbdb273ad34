//! Circle shape.

use super::ShapeTrait;
use kurbo::{Point, Rect, Vec2};

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Create the circle described by a drag box: centered in the box, with a
    /// radius of half the box diagonal.
    pub fn from_drag(anchor: Point, point: Point) -> Self {
        let center = anchor.midpoint(point);
        let radius = (point - anchor).hypot() / 2.0;
        Self::new(center, radius)
    }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        self.center.distance(point) <= self.radius
    }

    fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.center + delta, self.radius)
    }

    fn halo(&self, padding: f64) -> Rect {
        self.bounds().inflate(padding, padding)
    }
}
