//! Drawing surface abstraction.
//!
//! The board never draws pixels itself. It issues stroke calls against a
//! [`Surface`], which a rendering backend implements.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Cursor shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
}

/// Trait for rendering backends.
pub trait Surface {
    /// Top-left corner of the surface in raw input coordinates.
    fn origin(&self) -> Point;

    /// Size of the drawable area.
    fn size(&self) -> Size;

    /// Erase everything inside `region`.
    fn clear(&mut self, region: Rect);

    /// Paint the whole surface with `color`.
    fn fill_background(&mut self, color: Color);

    /// Stroke a rectangle with rounded corners.
    ///
    /// `rect` is passed through as given; its corners may be inverted.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color, line_width: f64);

    /// Stroke a full circle.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, start: Point, end: Point, color: Color, line_width: f64);

    /// Update the cursor affordance.
    fn set_cursor(&mut self, _cursor: CursorIcon) {}
}

/// Convert a raw input position into surface-local coordinates.
pub fn to_local<S: Surface + ?Sized>(surface: &S, raw: Point) -> Point {
    raw - surface.origin().to_vec2()
}

/// Full surface bounds in surface-local coordinates.
pub fn surface_rect<S: Surface + ?Sized>(surface: &S) -> Rect {
    Rect::from_origin_size(Point::ZERO, surface.size())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::shapes::SerializableColor;

    /// One recorded surface call.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Clear(Rect),
        Background(SerializableColor),
        RoundedRect(Rect, f64, SerializableColor),
        Circle(Point, f64, SerializableColor),
        Line(Point, Point, SerializableColor),
        Cursor(CursorIcon),
    }

    /// Surface that records calls instead of drawing.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub origin: Point,
        pub ops: Vec<Op>,
    }

    impl Recorder {
        pub fn with_origin(origin: Point) -> Self {
            Self {
                origin,
                ops: Vec::new(),
            }
        }

        /// Number of full redraws seen so far.
        pub fn frames(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Clear(_))).count()
        }

        /// Calls issued since the most recent clear.
        pub fn last_frame(&self) -> &[Op] {
            let start = self
                .ops
                .iter()
                .rposition(|op| matches!(op, Op::Clear(_)))
                .unwrap_or(0);
            &self.ops[start..]
        }

        pub fn last_cursor(&self) -> Option<CursorIcon> {
            self.ops.iter().rev().find_map(|op| match op {
                Op::Cursor(c) => Some(*c),
                _ => None,
            })
        }
    }

    impl Surface for Recorder {
        fn origin(&self) -> Point {
            self.origin
        }

        fn size(&self) -> Size {
            Size::new(2000.0, 1000.0)
        }

        fn clear(&mut self, region: Rect) {
            self.ops.push(Op::Clear(region));
        }

        fn fill_background(&mut self, color: Color) {
            self.ops.push(Op::Background(color.into()));
        }

        fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color, _line_width: f64) {
            self.ops.push(Op::RoundedRect(rect, radius, color.into()));
        }

        fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, _line_width: f64) {
            self.ops.push(Op::Circle(center, radius, color.into()));
        }

        fn stroke_line(&mut self, start: Point, end: Point, color: Color, _line_width: f64) {
            self.ops.push(Op::Line(start, end, color.into()));
        }

        fn set_cursor(&mut self, cursor: CursorIcon) {
            self.ops.push(Op::Cursor(cursor));
        }
    }
}
