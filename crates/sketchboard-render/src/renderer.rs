//! Renderer errors and the command-recording surface.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::Serialize;
use sketchboard_core::shapes::SerializableColor;
use sketchboard_core::{CursorIcon, Surface};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Reject sizes a surface cannot be built with.
pub(crate) fn validate_size(size: Size) -> RenderResult<Size> {
    let valid = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0;
    if valid {
        Ok(size)
    } else {
        Err(RendererError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        region: Rect,
    },
    FillBackground {
        color: SerializableColor,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: f64,
        color: SerializableColor,
        line_width: f64,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: SerializableColor,
        line_width: f64,
    },
    StrokeLine {
        start: Point,
        end: Point,
        color: SerializableColor,
        line_width: f64,
    },
}

/// A surface that records draw calls instead of rasterizing them.
///
/// Used by the headless replay tool and by tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    origin: Point,
    size: Size,
    cursor: CursorIcon,
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingSurface {
    /// Create a surface of `size` whose top-left corner sits at `origin` in
    /// raw input coordinates.
    pub fn new(size: Size, origin: Point) -> RenderResult<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            origin,
            size,
            cursor: CursorIcon::Default,
            commands: Vec::new(),
            frames: 0,
        })
    }

    /// Every command recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands of the most recent frame, starting at its clear.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of frames started (clears issued).
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Current cursor affordance.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Drop everything recorded so far, keeping the frame counter.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn origin(&self) -> Point {
        self.origin
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { region });
    }

    fn fill_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillBackground {
            color: color.into(),
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeRoundedRect {
            rect,
            radius,
            color: color.into(),
            line_width,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: color.into(),
            line_width,
        });
    }

    fn stroke_line(&mut self, start: Point, end: Point, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            start,
            end,
            color: color.into(),
            line_width,
        });
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        if self.cursor != cursor {
            log::trace!("Cursor changed to {:?}", cursor);
        }
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchboard_core::{InteractionController, KeyEvent, ToolKind};

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Size::new(2000.0, 1000.0), Point::ZERO).unwrap()
    }

    #[test]
    fn test_rejects_invalid_size() {
        assert!(RecordingSurface::new(Size::new(0.0, 100.0), Point::ZERO).is_err());
        assert!(RecordingSurface::new(Size::new(100.0, f64::NAN), Point::ZERO).is_err());
        let err = RecordingSurface::new(Size::new(-1.0, 5.0), Point::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "Invalid surface size: -1x5");
    }

    #[test]
    fn test_selected_shape_frame() {
        let mut surface = surface();
        let mut controller = InteractionController::new();

        controller.set_tool(&mut surface, ToolKind::Rectangle);
        controller.pointer_down(&mut surface, Point::new(10.0, 10.0));
        controller.pointer_up(&mut surface, Point::new(60.0, 50.0));
        controller.pointer_down(&mut surface, Point::new(30.0, 30.0));

        let white = SerializableColor::white();
        let green = SerializableColor::green();
        assert_eq!(
            surface.last_frame(),
            &[
                DrawCommand::Clear {
                    region: Rect::new(0.0, 0.0, 2000.0, 1000.0)
                },
                DrawCommand::FillBackground {
                    color: SerializableColor::black()
                },
                DrawCommand::StrokeRoundedRect {
                    rect: Rect::new(7.0, 7.0, 63.0, 53.0),
                    radius: 20.0,
                    color: green,
                    line_width: 1.0,
                },
                DrawCommand::StrokeRoundedRect {
                    rect: Rect::new(10.0, 10.0, 60.0, 50.0),
                    radius: 20.0,
                    color: white,
                    line_width: 1.0,
                },
            ]
        );
    }

    #[test]
    fn test_cursor_follows_gesture() {
        let mut surface = surface();
        let mut controller = InteractionController::new();

        controller.set_tool(&mut surface, ToolKind::Circle);
        controller.pointer_down(&mut surface, Point::new(0.0, 0.0));
        controller.pointer_up(&mut surface, Point::new(40.0, 30.0));

        controller.pointer_down(&mut surface, Point::new(20.0, 15.0));
        controller.pointer_move(&mut surface, Point::new(25.0, 15.0));
        assert_eq!(surface.cursor(), CursorIcon::Move);

        controller.pointer_up(&mut surface, Point::new(25.0, 15.0));
        controller.pointer_move(&mut surface, Point::new(300.0, 300.0));
        assert_eq!(surface.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_delete_repaints_empty_board() {
        let mut surface = surface();
        let mut controller = InteractionController::new();

        controller.set_tool(&mut surface, ToolKind::Line);
        controller.pointer_down(&mut surface, Point::new(0.0, 0.0));
        controller.pointer_up(&mut surface, Point::new(100.0, 0.0));
        controller.pointer_down(&mut surface, Point::new(50.0, 1.0));
        controller.pointer_up(&mut surface, Point::new(50.0, 1.0));
        let frames = surface.frame_count();

        controller.key_down(&mut surface, &KeyEvent::Pressed("Backspace".into()));

        assert_eq!(surface.frame_count(), frames + 1);
        assert_eq!(surface.last_frame().len(), 2);
    }

    #[test]
    fn test_take_commands() {
        let mut surface = surface();
        surface.clear(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(surface.take_commands().len(), 1);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.frame_count(), 1);
    }

    #[test]
    fn test_command_json_shape() {
        let cmd = DrawCommand::StrokeLine {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 2.0),
            color: SerializableColor::white(),
            line_width: 1.0,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["op"], "stroke_line");
        assert_eq!(json["end"]["y"], 2.0);
    }
}
