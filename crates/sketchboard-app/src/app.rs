//! Session replay.

use crate::script::{ScriptError, SessionScript};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use sketchboard_core::{BoardConfig, InputEvent, InteractionController, Mode, ToolKind};
use sketchboard_render::{DrawCommand, RecordingSurface, RenderResult};

/// Surface and board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Top-left corner of the drawing surface in raw input coordinates.
    pub origin: Point,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sketchboard".to_string(),
            width: 2000.0,
            height: 1000.0,
            origin: Point::ZERO,
            board: BoardConfig::default(),
        }
    }
}

/// What the board looks like after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub frames: usize,
    pub shapes: usize,
    pub selection: Option<usize>,
    pub tool: ToolKind,
    pub gesture_in_progress: bool,
    /// Draw calls of the final frame.
    pub last_frame: Vec<DrawCommand>,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    controller: InteractionController,
    surface: RecordingSurface,
}

impl App {
    /// Create an app with an empty board.
    pub fn new(config: AppConfig) -> RenderResult<Self> {
        let surface = RecordingSurface::new(Size::new(config.width, config.height), config.origin)?;
        let controller = InteractionController::with_config(config.board.clone());
        log::info!(
            "{}: {}x{} surface at ({}, {})",
            config.title,
            config.width,
            config.height,
            config.origin.x,
            config.origin.y
        );
        Ok(Self {
            config,
            controller,
            surface,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    /// Feed events to the controller in order.
    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) -> usize {
        let mut count = 0;
        for event in events {
            log::trace!("Event {}: {:?}", count, event);
            self.controller.handle_event(&mut self.surface, event);
            count += 1;
        }
        count
    }

    /// Build an app from a script and replay all of its events.
    pub fn run_script(script: &SessionScript) -> Result<(Self, ReplaySummary), ScriptError> {
        let mut app = Self::new(script.app.clone())?;
        let events = app.replay(&script.events);
        let summary = app.summary(events);
        Ok((app, summary))
    }

    /// Describe the current board state.
    pub fn summary(&self, events: usize) -> ReplaySummary {
        let store = self.controller.store();
        ReplaySummary {
            events,
            frames: self.surface.frame_count(),
            shapes: store.len(),
            selection: store.selection(),
            tool: self.controller.tool(),
            gesture_in_progress: self.controller.mode() != Mode::Idle,
            last_frame: self.surface.last_frame().to_vec(),
        }
    }
}
