//! Shape definitions for the whiteboard.

mod circle;
mod line;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Common behaviour of every shape kind.
pub trait ShapeTrait {
    /// Axis-aligned bounding box in surface-local coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in surface-local coordinates) hits this shape.
    ///
    /// `tolerance` only widens shapes without an area (lines).
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// A copy of this shape with every position-bearing field shifted by `delta`.
    /// Sizes, radii and lengths are left alone.
    fn translated(&self, delta: Vec2) -> Self
    where
        Self: Sized;

    /// Outline drawn around the shape while it is selected.
    fn halo(&self, padding: f64) -> Rect;
}

/// A committed or previewed shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
}

impl Shape {
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
            Shape::Line(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn translated(&self, delta: Vec2) -> Shape {
        match self {
            Shape::Rectangle(s) => Shape::Rectangle(s.translated(delta)),
            Shape::Circle(s) => Shape::Circle(s.translated(delta)),
            Shape::Line(s) => Shape::Line(s.translated(delta)),
        }
    }

    pub fn halo(&self, padding: f64) -> Rect {
        match self {
            Shape::Rectangle(s) => s.halo(padding),
            Shape::Circle(s) => s.halo(padding),
            Shape::Line(s) => s.halo(padding),
        }
    }

    /// Short name used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}
