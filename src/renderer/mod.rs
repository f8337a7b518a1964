//! Rendering module
//!
//! Draws session state through the `Canvas` primitives; the actual graphics
//! backend lives behind that trait.

pub mod canvas;
pub mod commands;
pub mod scene;

pub use canvas::{Canvas, Rgba, TextAlign};
pub use commands::{CommandBuffer, DrawCommand};
pub use scene::draw_frame;
