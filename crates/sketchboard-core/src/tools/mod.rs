//! Tool system for the whiteboard.

use crate::shapes::{Circle, Line, Rectangle, Shape};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools, as offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pointer,
    Rectangle,
    Circle,
    Line,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pointer,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
    ];

    /// Toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Pointer => "Pointer",
            ToolKind::Rectangle => "Rect",
            ToolKind::Circle => "Circle",
            ToolKind::Line => "Line",
        }
    }

    /// Whether a drag on empty space with this tool draws a new shape.
    pub fn creates_shapes(self) -> bool {
        !matches!(self, ToolKind::Pointer)
    }

    /// Derive the shape for a drag from `anchor` to `point`.
    ///
    /// Used both for the live preview and for the committed shape, so the two
    /// always agree. Returns `None` for tools that never create shapes.
    pub fn shape_from_drag(
        self,
        anchor: Point,
        point: Point,
        normalize_rects: bool,
    ) -> Option<Shape> {
        match self {
            ToolKind::Rectangle => {
                let rect = if normalize_rects {
                    Rectangle::from_corners(anchor, point)
                } else {
                    Rectangle::from_drag(anchor, point)
                };
                Some(Shape::Rectangle(rect))
            }
            ToolKind::Circle => Some(Shape::Circle(Circle::from_drag(anchor, point))),
            ToolKind::Line => Some(Shape::Line(Line::new(anchor, point))),
            ToolKind::Pointer => None,
        }
    }
}
