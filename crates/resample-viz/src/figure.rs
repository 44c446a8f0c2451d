use resample_image::Image;

use crate::{Renderer, VizError};

/// A raster together with the labels shown around it.
#[derive(Debug, Clone)]
pub struct Panel<'a> {
    /// The raster to display.
    pub image: &'a Image<u8>,
    /// Text shown above the raster.
    pub title: String,
    /// Text shown below the raster.
    pub xlabel: String,
}

impl<'a> Panel<'a> {
    /// Create a new panel.
    pub fn new(image: &'a Image<u8>, title: impl Into<String>, xlabel: impl Into<String>) -> Self {
        Self {
            image,
            title: title.into(),
            xlabel: xlabel.into(),
        }
    }
}

/// A grid of panel slots rendered row by row.
///
/// Slots that are never filled stay blank.
///
/// # Example
///
/// ```
/// use resample_image::Image;
/// use resample_viz::{Figure, Panel, TextRenderer};
///
/// let image = Image::from_rows(&[[0u8, 255]]).unwrap();
///
/// let mut figure = Figure::new(1, 2);
/// figure.set(0, 1, Panel::new(&image, "ramp", "two pixels")).unwrap();
///
/// let mut renderer = TextRenderer::new(Vec::new()).with_color(false);
/// figure.render(&mut renderer).unwrap();
///
/// let out = String::from_utf8(renderer.into_inner()).unwrap();
/// assert!(out.contains("ramp"));
/// assert!(out.contains("255"));
/// ```
#[derive(Debug, Clone)]
pub struct Figure<'a> {
    rows: usize,
    cols: usize,
    slots: Vec<Option<Panel<'a>>>,
}

impl<'a> Figure<'a> {
    /// Create an empty figure with `rows x cols` slots.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: vec![None; rows * cols],
        }
    }

    /// Number of slot rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of slot columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Place a panel into the slot at `(row, col)`, replacing any previous panel.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::SlotOutOfRange`] if the slot does not exist.
    pub fn set(&mut self, row: usize, col: usize, panel: Panel<'a>) -> Result<(), VizError> {
        if row >= self.rows || col >= self.cols {
            return Err(VizError::SlotOutOfRange(row, col, self.rows, self.cols));
        }
        self.slots[row * self.cols + col] = Some(panel);
        Ok(())
    }

    /// Get the panel at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&Panel<'a>> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.slots[row * self.cols + col].as_ref()
    }

    /// Render every slot row through `renderer`, top to bottom.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), VizError> {
        if self.cols == 0 {
            return Ok(());
        }
        for (i, row) in self.slots.chunks(self.cols).enumerate() {
            log::trace!("rendering figure row {i}");
            renderer.render_row(row)?;
        }
        Ok(())
    }
}
