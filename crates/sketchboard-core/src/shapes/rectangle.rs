//! Rectangle shape.

use super::ShapeTrait;
use kurbo::{Point, Rect, Vec2};

/// A rectangle anchored at the corner where its drag started.
///
/// `width` and `height` keep the sign of the drag, so a rectangle drawn up-left
/// has negative extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Drag-start corner.
    pub position: Point,
    /// Signed width.
    pub width: f64,
    /// Signed height.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Create a rectangle spanning a drag from `anchor` to `point`, keeping the sign.
    pub fn from_drag(anchor: Point, point: Point) -> Self {
        Self::new(anchor, point.x - anchor.x, point.y - anchor.y)
    }

    /// Create a rectangle from two corner points, normalized to positive extents.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();

        Self::new(Point::new(min_x, min_y), width, height)
    }

    /// The rectangle as a kurbo Rect, without normalizing the corners.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect().abs()
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        // Deliberately not normalized: a negative extent yields an empty range.
        let within_x = point.x >= self.position.x && point.x <= self.position.x + self.width;
        let within_y = point.y >= self.position.y && point.y <= self.position.y + self.height;
        within_x && within_y
    }

    fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.position + delta, self.width, self.height)
    }

    fn halo(&self, padding: f64) -> Rect {
        self.bounds().inflate(padding, padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_drag() {
        let rect = Rectangle::from_drag(Point::new(10.0, 10.0), Point::new(60.0, 50.0));
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(Point::new(100.0, 100.0), Point::new(50.0, 50.0));
        assert!((rect.position.x - 50.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 50.0).abs() < f64::EPSILON);
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_inclusive_edges() {
        let rect = Rectangle::new(Point::new(10.0, 10.0), 50.0, 40.0);
        assert!(rect.hit_test(Point::new(10.0, 10.0), 0.0));
        assert!(rect.hit_test(Point::new(60.0, 50.0), 0.0));
        assert!(rect.hit_test(Point::new(35.0, 30.0), 0.0));
        assert!(!rect.hit_test(Point::new(61.0, 10.0), 0.0));
        assert!(!rect.hit_test(Point::new(10.0, 51.0), 0.0));
    }

    #[test]
    fn test_backward_rectangle_is_not_hit() {
        let rect = Rectangle::from_drag(Point::new(60.0, 50.0), Point::new(10.0, 10.0));
        assert!(!rect.hit_test(Point::new(35.0, 30.0), 0.0));
        assert!(!rect.hit_test(Point::new(60.0, 50.0), 0.0));
    }

    #[test]
    fn test_bounds_are_normalized() {
        let rect = Rectangle::new(Point::new(60.0, 50.0), -50.0, -40.0);
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_halo_inflates_each_side() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let halo = rect.halo(3.0);
        assert!((halo.x0 - 7.0).abs() < f64::EPSILON);
        assert!((halo.y0 - 17.0).abs() < f64::EPSILON);
        assert!((halo.x1 - 113.0).abs() < f64::EPSILON);
        assert!((halo.y1 - 73.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_halo_of_backward_rectangle_grows() {
        let rect = Rectangle::new(Point::new(60.0, 50.0), -50.0, -40.0);
        let halo = rect.halo(3.0);
        assert!((halo.x0 - 7.0).abs() < f64::EPSILON);
        assert!((halo.y0 - 7.0).abs() < f64::EPSILON);
        assert!((halo.x1 - 63.0).abs() < f64::EPSILON);
        assert!((halo.y1 - 53.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translated() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let moved = rect.translated(Vec2::new(5.0, -7.5));
        assert!((moved.position.x - 15.0).abs() < f64::EPSILON);
        assert!((moved.position.y - 12.5).abs() < f64::EPSILON);
        assert!((moved.width - 100.0).abs() < f64::EPSILON);
        assert!((moved.height - 50.0).abs() < f64::EPSILON);
    }
}
