#![deny(missing_docs)]
//! Terminal rendering of grayscale rasters with annotated pixel values.
//!
//! The renderer only consumes finished rasters. It has no access to, and no
//! influence on, how those rasters were produced.

/// Error types for the viz module.
pub mod error;

/// Panels and figure layout.
pub mod figure;

/// Plain text and ANSI terminal renderer.
pub mod text;

pub use crate::error::VizError;
pub use crate::figure::{Figure, Panel};
pub use crate::text::{text_color, TextColor, TextRenderer};

/// A sink able to display raster panels.
pub trait Renderer {
    /// Render a single panel.
    fn render(&mut self, panel: &Panel<'_>) -> Result<(), VizError>;

    /// Render one row of figure slots. Empty slots are skipped by default.
    fn render_row(&mut self, slots: &[Option<Panel<'_>>]) -> Result<(), VizError> {
        for panel in slots.iter().flatten() {
            self.render(panel)?;
        }
        Ok(())
    }
}
