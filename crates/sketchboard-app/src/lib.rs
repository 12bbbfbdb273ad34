//! Sketchboard Application
//!
//! Loads a recorded input session, replays it against the interaction
//! controller on a recording surface, and reports the resulting board.

mod app;
mod script;
mod shortcuts;

pub use app::{App, AppConfig, ReplaySummary};
pub use script::{ScriptError, SessionScript};
pub use shortcuts::{Shortcut, ShortcutRegistry};
