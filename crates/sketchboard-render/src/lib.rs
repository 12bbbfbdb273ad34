//! Sketchboard Render Library
//!
//! [`Surface`](sketchboard_core::Surface) implementations for Sketchboard.
//! The recording surface is always available; the Vello scene builder sits
//! behind the `vello-renderer` feature.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{DrawCommand, RecordingSurface, RenderResult, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
