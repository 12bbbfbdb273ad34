//! Board appearance and interaction settings.

use crate::shapes::SerializableColor;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Settings shared by the controller and the painter.
///
/// Every field has a default, so a partial JSON object deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Surface background.
    pub background: SerializableColor,
    /// Outline color for shapes and previews.
    pub stroke_color: SerializableColor,
    /// Selection halo color.
    pub selection_color: SerializableColor,
    /// Stroke width for outlines and halos.
    pub line_width: f64,
    /// Corner radius of rectangle outlines and their halos.
    pub corner_radius: f64,
    /// Halo inflation around a selected rectangle.
    pub rect_halo_padding: f64,
    /// Halo inflation around the bounding square of a selected circle.
    pub circle_halo_padding: f64,
    /// Halo inflation around the endpoint box of a selected line.
    pub line_halo_padding: f64,
    /// Allowed detour when hit-testing lines.
    pub line_tolerance: f64,
    /// Normalize rectangles dragged up or left so they stay selectable.
    pub normalize_rects: bool,
}

impl BoardConfig {
    /// Default corner radius for rectangle outlines.
    pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;

    /// Default hit tolerance for lines.
    pub const DEFAULT_LINE_TOLERANCE: f64 = 2.0;

    pub fn background(&self) -> Color {
        self.background.into()
    }

    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    pub fn selection(&self) -> Color {
        self.selection_color.into()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background: SerializableColor::black(),
            stroke_color: SerializableColor::white(),
            selection_color: SerializableColor::green(),
            line_width: 1.0,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            rect_halo_padding: 3.0,
            circle_halo_padding: 3.0,
            line_halo_padding: 5.0,
            line_tolerance: Self::DEFAULT_LINE_TOLERANCE,
            normalize_rects: false,
        }
    }
}
