//! Session script loading.

use crate::app::AppConfig;
use serde::Deserialize;
use sketchboard_core::InputEvent;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading a session script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid session script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Surface error: {0}")]
    Surface(#[from] sketchboard_render::RendererError),
}

/// A recorded input session: surface settings plus the events to replay.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionScript {
    /// Surface and board settings.
    #[serde(default)]
    pub app: AppConfig,
    /// Events in the order they were received.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl SessionScript {
    /// Parse a script from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} events from {}", script.events.len(), path.display());
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchboard_core::{PointerEvent, ToolKind};
    use std::io::Write;

    const SCRIPT: &str = r#"{
        "app": { "width": 800, "height": 600, "board": { "normalize_rects": true } },
        "events": [
            { "tool": "Rectangle" },
            { "pointer": { "Down": { "position": { "x": 10, "y": 10 } } } },
            { "pointer": { "Up": { "position": { "x": 60, "y": 50 } } } }
        ]
    }"#;

    #[test]
    fn test_parse_script() {
        let script = SessionScript::from_json(SCRIPT).unwrap();
        assert_eq!(script.app.width, 800.0);
        assert!(script.app.board.normalize_rects);
        assert_eq!(script.events.len(), 3);
        assert_eq!(script.events[0], InputEvent::ToolChanged(ToolKind::Rectangle));
        assert!(matches!(
            script.events[2],
            InputEvent::Pointer(PointerEvent::Up { .. })
        ));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let script = SessionScript::from_json("{}").unwrap();
        assert_eq!(script.app.width, 2000.0);
        assert_eq!(script.app.height, 1000.0);
        assert!(script.events.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();

        let script = SessionScript::load(file.path()).unwrap();
        assert_eq!(script.events.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionScript::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let json = r#"{ "events": [ { "tool": "Pencil" } ] }"#;
        let err = SessionScript::from_json(json).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }
}
