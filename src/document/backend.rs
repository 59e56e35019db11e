//! Document backend trait and the page elements it consumes.
//!
//! The [`DocumentBackend`] trait is the narrow surface the emitter talks to:
//! append a header row, a spacer, a grid table or a page break, then save.
//! Tables arrive fully described as a [`GridTable`], with every image already
//! decoded, so a backend never touches the source files.
//!
//! The production implementation is
//! [`DocxBackend`](super::docx_backend::DocxBackend).

use super::units;
use crate::layout::{Cell, CellGeometry, Grid};
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to write document: {0}")]
    Pack(String),
}

/// An image decoded and ready to embed.
///
/// The pixels are re-encoded as PNG whatever the source format was.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub path: PathBuf,
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    /// Display width in inches.
    pub width: f64,
}

impl EmbeddedImage {
    /// Decode `path` and prepare it for display `width` inches wide.
    pub fn load(path: &Path, width: f64) -> Result<Self, BackendError> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let mut png = Vec::new();
        decoded.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(Self {
            path: path.to_path_buf(),
            png,
            width_px: decoded.width(),
            height_px: decoded.height(),
            width,
        })
    }

    /// Display height in inches.
    pub fn height(&self) -> f64 {
        units::scaled_height(self.width, (self.width_px, self.height_px))
    }
}

/// What a grid cell shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Image(EmbeddedImage),
    Placeholder(String),
}

/// A full page grid: shape, cell size, and the occupied cells.
///
/// Cells without content are rendered empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTable {
    pub grid: Grid,
    pub geometry: CellGeometry,
    pub cells: Vec<(Cell, CellContent)>,
}

impl GridTable {
    pub fn new(grid: Grid, geometry: CellGeometry) -> Self {
        Self {
            grid,
            geometry,
            cells: Vec::new(),
        }
    }

    /// Put `content` in `cell`; cells outside the grid are ignored.
    pub fn set(&mut self, cell: Cell, content: CellContent) {
        if cell.row >= self.grid.rows || cell.column >= self.grid.columns {
            return;
        }
        self.cells.retain(|(c, _)| *c != cell);
        self.cells.push((cell, content));
    }

    pub fn content_at(&self, cell: Cell) -> Option<&CellContent> {
        self.cells
            .iter()
            .find(|(c, _)| *c == cell)
            .map(|(_, content)| content)
    }
}

/// Trait for document backends.
///
/// Calls append to the document in order; there are no backward edits.
pub trait DocumentBackend {
    /// Two-cell header: `title` on the left, `date_label` on the right.
    fn add_header_row(&mut self, title: &str, date_label: &str);

    /// Thin paragraph between header and grid.
    fn add_spacer(&mut self);

    /// Grid table with an outer border and no inside borders.
    fn add_grid_table(&mut self, table: GridTable);

    fn add_page_break(&mut self);

    /// Write the document to `path`, replacing any existing file.
    fn save(&mut self, path: &Path) -> Result<(), BackendError>;
}
