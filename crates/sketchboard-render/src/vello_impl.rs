//! Vello-based surface implementation.

use crate::renderer::{RenderResult, validate_size};
use kurbo::{Point, Rect, Size};
use sketchboard_core::{CursorIcon, Surface};
use vello::Scene;
use vello::kurbo::{self as vk, Affine, Stroke};
use vello::peniko::{self as vp, Fill};

/// Builds a Vello scene from the board's stroke calls.
///
/// The scene is rebuilt from scratch every frame; hand it to a
/// `vello::Renderer` to rasterize it.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Top-left corner of the surface in raw input coordinates.
    origin: Point,
    /// Drawable size.
    size: Size,
    /// Last background color, used to paint over partially cleared regions.
    background: vp::Color,
    /// Current cursor affordance.
    cursor: CursorIcon,
}

/// Convert a workspace color into Vello's peniko color.
fn to_vello_color(color: peniko::Color) -> vp::Color {
    let rgba = color.to_rgba8();
    vp::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn to_vello_rect(rect: Rect) -> vk::Rect {
    vk::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1)
}

fn to_vello_point(point: Point) -> vk::Point {
    vk::Point::new(point.x, point.y)
}

/// Backward drags arrive with inverted corners; draw them normalized.
fn to_vello_rounded_rect(rect: Rect, radius: f64) -> vk::RoundedRect {
    vk::RoundedRect::from_rect(to_vello_rect(rect.abs()), radius)
}

impl VelloSurface {
    /// Create an empty surface.
    pub fn new(size: Size, origin: Point) -> RenderResult<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            scene: Scene::new(),
            origin,
            size,
            background: vp::Color::from_rgba8(0, 0, 0, 255),
            cursor: CursorIcon::Default,
        })
    }

    /// Get a reference to the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Current cursor affordance, for the windowing layer to apply.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Move or resize the surface, e.g. after a window resize.
    pub fn set_bounds(&mut self, size: Size, origin: Point) -> RenderResult<()> {
        self.size = validate_size(size)?;
        self.origin = origin;
        Ok(())
    }

    fn full_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }
}

impl Surface for VelloSurface {
    fn origin(&self) -> Point {
        self.origin
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        let full = self.full_rect();
        let region = region.abs();
        let covers_surface = region.x0 <= full.x0
            && region.y0 <= full.y0
            && region.x1 >= full.x1
            && region.y1 >= full.y1;
        if covers_surface {
            self.scene.reset();
        } else {
            // Scenes are append-only; cover the region instead.
            self.scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                self.background,
                None,
                &to_vello_rect(region),
            );
        }
    }

    fn fill_background(&mut self, color: peniko::Color) {
        self.background = to_vello_color(color);
        let bg_rect = to_vello_rect(self.full_rect());
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, self.background, None, &bg_rect);
    }

    fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        color: peniko::Color,
        line_width: f64,
    ) {
        let rounded = to_vello_rounded_rect(rect, radius);
        self.scene.stroke(
            &Stroke::new(line_width),
            Affine::IDENTITY,
            to_vello_color(color),
            None,
            &rounded,
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: peniko::Color, line_width: f64) {
        let circle = vk::Circle::new(to_vello_point(center), radius);
        self.scene.stroke(
            &Stroke::new(line_width),
            Affine::IDENTITY,
            to_vello_color(color),
            None,
            &circle,
        );
    }

    fn stroke_line(&mut self, start: Point, end: Point, color: peniko::Color, line_width: f64) {
        let line = vk::Line::new(to_vello_point(start), to_vello_point(end));
        self.scene.stroke(
            &Stroke::new(line_width),
            Affine::IDENTITY,
            to_vello_color(color),
            None,
            &line,
        );
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }
}
