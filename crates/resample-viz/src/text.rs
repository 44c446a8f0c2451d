use std::io::Write;

use resample_image::Image;

use crate::{Panel, Renderer, VizError};

/// Values below this intensity get white text, the rest black text.
pub const TEXT_COLOR_THRESHOLD: u8 = 128;

// every cell is printed with the same visible width so the columns line up
const CELL_WIDTH: usize = 5;

/// Color of the value printed over a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// Used over dark cells.
    White,
    /// Used over light cells.
    Black,
}

/// Pick a legible text color for a cell of the given intensity.
///
/// # Example
///
/// ```
/// use resample_viz::{text_color, TextColor};
///
/// assert_eq!(text_color(127), TextColor::White);
/// assert_eq!(text_color(128), TextColor::Black);
/// ```
pub fn text_color(value: u8) -> TextColor {
    if value < TEXT_COLOR_THRESHOLD {
        TextColor::White
    } else {
        TextColor::Black
    }
}

struct Line {
    text: String,
    // printable width, escape sequences excluded
    width: usize,
}

impl Line {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            width: text.chars().count(),
        }
    }
}

/// Renders panels as text grids, one cell per pixel with its value printed inside.
///
/// With color enabled each cell is painted with its own gray level using 24-bit ANSI
/// escapes, and the value is printed in white or black according to [`text_color`].
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
    gap: usize,
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to `out`, with color enabled.
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            gap: 4,
        }
    }

    /// Enable or disable ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the number of spaces between panels rendered side by side.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Consume the renderer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell(&self, value: u8) -> String {
        if !self.color {
            return format!("{value:>4} ");
        }
        let fg = match text_color(value) {
            TextColor::White => "255;255;255",
            TextColor::Black => "0;0;0",
        };
        format!("\x1b[48;2;{value};{value};{value}m\x1b[38;2;{fg}m{value:^5}\x1b[0m")
    }

    fn grid_lines(&self, image: &Image<u8>) -> Vec<Line> {
        image
            .iter_rows()
            .map(|row| Line {
                text: row.iter().map(|&v| self.cell(v)).collect(),
                width: row.len() * CELL_WIDTH,
            })
            .collect()
    }

    fn panel_lines(&self, panel: &Panel<'_>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(panel.image.rows() + 2);
        lines.push(Line::plain(&panel.title));
        lines.extend(self.grid_lines(panel.image));
        lines.push(Line::plain(&panel.xlabel));
        lines
    }

    fn write_line(&mut self, text: &str) -> Result<(), VizError> {
        writeln!(self.out, "{}", text.trim_end())?;
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, panel: &Panel<'_>) -> Result<(), VizError> {
        for line in self.panel_lines(panel) {
            self.write_line(&line.text)?;
        }
        self.write_line("")
    }

    fn render_row(&mut self, slots: &[Option<Panel<'_>>]) -> Result<(), VizError> {
        let blocks: Vec<Vec<Line>> = slots
            .iter()
            .flatten()
            .map(|panel| self.panel_lines(panel))
            .collect();

        if blocks.is_empty() {
            return Ok(());
        }

        let widths: Vec<usize> = blocks
            .iter()
            .map(|b| b.iter().map(|l| l.width).max().unwrap_or(0))
            .collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let mut text = String::new();
            for (block, &width) in blocks.iter().zip(widths.iter()) {
                let (segment, used) = match block.get(i) {
                    Some(line) => (line.text.as_str(), line.width),
                    None => ("", 0),
                };
                text.push_str(segment);
                text.push_str(&" ".repeat(width - used + self.gap));
            }
            self.write_line(&text)?;
        }
        self.write_line("")
    }
}
