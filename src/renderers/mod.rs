//! Renderers turn a finished [`Drawing`] into text.

pub mod ascii;
pub mod canvas;
pub mod charset;

pub use ascii::TextRenderer;

use crate::layout::types::Drawing;

/// Trait for drawing renderers.
pub trait Renderer {
    /// Render a laid-out graph to a string.
    fn render(&self, drawing: &Drawing) -> String;
}
