//! Full-surface redraw.

use crate::config::BoardConfig;
use crate::shapes::Shape;
use crate::store::ShapeStore;
use crate::surface::{Surface, surface_rect};
use peniko::Color;

/// Redraw the whole board.
///
/// Clears the surface, fills the background, then strokes every shape in
/// z-order. A selected shape gets its halo stroked before its own outline.
/// `preview`, when present, is stroked last and is not part of the store.
pub fn paint<S: Surface + ?Sized>(
    surface: &mut S,
    store: &ShapeStore,
    config: &BoardConfig,
    preview: Option<&Shape>,
) {
    let region = surface_rect(surface);
    surface.clear(region);
    surface.fill_background(config.background());

    for (index, shape) in store.iter() {
        if store.is_selected(index) {
            paint_halo(surface, shape, config);
        }
        paint_outline(surface, shape, config.stroke(), config);
    }

    if let Some(shape) = preview {
        paint_outline(surface, shape, config.stroke(), config);
    }
}

fn paint_outline<S: Surface + ?Sized>(
    surface: &mut S,
    shape: &Shape,
    color: Color,
    config: &BoardConfig,
) {
    match shape {
        Shape::Rectangle(rect) => surface.stroke_rounded_rect(
            rect.as_rect(),
            config.corner_radius,
            color,
            config.line_width,
        ),
        Shape::Circle(circle) => {
            surface.stroke_circle(circle.center, circle.radius, color, config.line_width)
        }
        Shape::Line(line) => surface.stroke_line(line.start, line.end, color, config.line_width),
    }
}

fn paint_halo<S: Surface + ?Sized>(surface: &mut S, shape: &Shape, config: &BoardConfig) {
    let (padding, radius) = match shape {
        Shape::Rectangle(_) => (config.rect_halo_padding, config.corner_radius),
        Shape::Circle(_) => (config.circle_halo_padding, 0.0),
        Shape::Line(_) => (config.line_halo_padding, 0.0),
    };
    surface.stroke_rounded_rect(shape.halo(padding), radius, config.selection(), config.line_width);
}
