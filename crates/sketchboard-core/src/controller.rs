//! Pointer and keyboard interaction.
//!
//! [`InteractionController`] turns raw input into create, select, move and
//! delete operations on its [`ShapeStore`], and repaints the surface after
//! every step that changes what is on screen.

use crate::config::BoardConfig;
use crate::input::{InputEvent, KeyEvent, PointerEvent};
use crate::painter;
use crate::shapes::Shape;
use crate::store::ShapeStore;
use crate::surface::{CursorIcon, Surface, to_local};
use crate::tools::ToolKind;
use kurbo::Point;

/// Coarse interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Drawing,
    Dragging,
}

/// State of the gesture in progress, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer button held.
    #[default]
    Idle,
    /// Drawing a new shape with the active tool.
    Drawing {
        /// Where the gesture began.
        anchor: Point,
        /// Latest pointer position.
        current: Point,
    },
    /// Moving the selected shape.
    Dragging {
        /// Where the gesture began.
        anchor: Point,
        /// Pointer position at the previous move, for incremental deltas.
        last: Point,
    },
}

impl GestureState {
    pub fn mode(&self) -> Mode {
        match self {
            GestureState::Idle => Mode::Idle,
            GestureState::Drawing { .. } => Mode::Drawing,
            GestureState::Dragging { .. } => Mode::Dragging,
        }
    }

    /// Where the current gesture began.
    pub fn anchor(&self) -> Option<Point> {
        match *self {
            GestureState::Idle => None,
            GestureState::Drawing { anchor, .. } | GestureState::Dragging { anchor, .. } => {
                Some(anchor)
            }
        }
    }
}

/// Drives a [`ShapeStore`] from pointer and keyboard input.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    store: ShapeStore,
    tool: ToolKind,
    gesture: GestureState,
    config: BoardConfig,
}

impl InteractionController {
    /// Create a controller with an empty board and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom settings.
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn mode(&self) -> Mode {
        self.gesture.mode()
    }

    /// Shape that would be committed if the pointer were released now.
    pub fn preview_shape(&self) -> Option<Shape> {
        match self.gesture {
            GestureState::Drawing { anchor, current } => {
                self.tool
                    .shape_from_drag(anchor, current, self.config.normalize_rects)
            }
            _ => None,
        }
    }

    /// Dispatch any input event.
    pub fn handle_event<S: Surface + ?Sized>(&mut self, surface: &mut S, event: &InputEvent) {
        match event {
            InputEvent::Pointer(pointer) => self.handle_pointer(surface, *pointer),
            InputEvent::Key(key) => self.key_down(surface, key),
            InputEvent::ToolChanged(tool) => self.set_tool(surface, *tool),
        }
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer<S: Surface + ?Sized>(&mut self, surface: &mut S, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(surface, position),
            PointerEvent::Move { position } => self.pointer_move(surface, position),
            PointerEvent::Up { position } => self.pointer_up(surface, position),
        }
    }

    /// Start a gesture at the raw position `raw`.
    ///
    /// A hit selects the shape and starts dragging it. A miss clears the
    /// selection and, for drawing tools, starts a new shape.
    pub fn pointer_down<S: Surface + ?Sized>(&mut self, surface: &mut S, raw: Point) {
        let point = to_local(surface, raw);

        if let Some(index) = self.store.hit_test(point, self.config.line_tolerance) {
            log::debug!("Selected shape {} at ({:.1}, {:.1})", index, point.x, point.y);
            self.store.select(Some(index));
            self.gesture = GestureState::Dragging {
                anchor: point,
                last: point,
            };
        } else {
            self.store.clear_selection();
            self.gesture = if self.tool.creates_shapes() {
                GestureState::Drawing {
                    anchor: point,
                    current: point,
                }
            } else {
                GestureState::Idle
            };
        }
        self.redraw(surface);
    }

    /// Continue the current gesture.
    pub fn pointer_move<S: Surface + ?Sized>(&mut self, surface: &mut S, raw: Point) {
        let point = to_local(surface, raw);

        match self.gesture {
            GestureState::Dragging { anchor, last } => {
                surface.set_cursor(CursorIcon::Move);
                let Some(index) = self.store.selection() else {
                    // Selected shape was deleted mid-drag.
                    return;
                };
                let delta = point - last;
                if let Some(moved) = self.store.get(index).map(|shape| shape.translated(delta)) {
                    log::trace!("Dragging shape {} by ({:.1}, {:.1})", index, delta.x, delta.y);
                    self.store.replace_at(index, moved);
                }
                self.gesture = GestureState::Dragging { anchor, last: point };
                self.redraw(surface);
            }
            GestureState::Drawing { anchor, .. } => {
                surface.set_cursor(CursorIcon::Default);
                self.gesture = GestureState::Drawing {
                    anchor,
                    current: point,
                };
                self.redraw(surface);
            }
            GestureState::Idle => surface.set_cursor(CursorIcon::Default),
        }
    }

    /// Finish the current gesture, committing a drawn shape if there is one.
    pub fn pointer_up<S: Surface + ?Sized>(&mut self, surface: &mut S, raw: Point) {
        let point = to_local(surface, raw);

        if let GestureState::Drawing { anchor, .. } = self.gesture {
            let shape = self
                .tool
                .shape_from_drag(anchor, point, self.config.normalize_rects);
            if let Some(shape) = shape {
                let index = self.store.add(shape);
                log::debug!("Added {} at index {}", shape.kind_name(), index);
            }
        }
        self.gesture = GestureState::Idle;
        self.redraw(surface);
    }

    /// Handle a key press. Only the delete key does anything.
    pub fn key_down<S: Surface + ?Sized>(&mut self, surface: &mut S, key: &KeyEvent) {
        if !key.is_delete() {
            return;
        }
        let Some(index) = self.store.selection() else {
            return;
        };
        if let Some(shape) = self.store.remove_at(index) {
            log::debug!("Deleted {} at index {}", shape.kind_name(), index);
        }
        self.redraw(surface);
    }

    /// Switch the active tool, abandoning any gesture in progress.
    pub fn set_tool<S: Surface + ?Sized>(&mut self, surface: &mut S, tool: ToolKind) {
        log::debug!("Tool changed to {}", tool.label());
        self.tool = tool;
        if self.gesture != GestureState::Idle {
            self.gesture = GestureState::Idle;
            self.redraw(surface);
        }
    }

    /// Repaint the board, including the preview of a shape being drawn.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let preview = self.preview_shape();
        painter::paint(surface, &self.store, &self.config, preview.as_ref());
    }
}
