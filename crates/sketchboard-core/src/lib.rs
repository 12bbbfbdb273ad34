//! Sketchboard Core Library
//!
//! Shape model and interaction state machine for the Sketchboard whiteboard.
//! Rendering is delegated to a [`Surface`] implementation.

pub mod config;
pub mod controller;
pub mod input;
pub mod painter;
pub mod shapes;
pub mod store;
pub mod surface;
pub mod tools;

pub use config::BoardConfig;
pub use controller::{GestureState, InteractionController, Mode};
pub use input::{InputEvent, KeyEvent, PointerEvent};
pub use shapes::{Circle, Line, Rectangle, Shape, ShapeTrait};
pub use store::ShapeStore;
pub use surface::{CursorIcon, Surface};
pub use tools::ToolKind;
