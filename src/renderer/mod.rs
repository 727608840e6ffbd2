//! Rendering module
//!
//! Scenes are drawn through the `Canvas` trait, so the core never depends on a
//! concrete drawing backend.

pub mod canvas;
pub mod scene;

pub use canvas::{Canvas, DrawCommand, Font, RecordingCanvas, TextAlign};
pub use scene::render;
