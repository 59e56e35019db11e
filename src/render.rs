//! Page emission and the end-to-end report run.
//!
//! [`render`] walks the page plan from [`layout::plan_pages`] and drives a
//! [`DocumentBackend`]. Each page is emitted as:
//!
//! ```text
//! [page break]                        each folder after the first,
//!                                     and each further page of a folder
//! | Kitchen           03/09 ~ 03/15 |   header row, bold
//!                                     spacer
//! +---------------------------------+
//! |   img        img        img     |   grid, outer border only
//! |   img     (not found)           |
//! +---------------------------------+
//! ```
//!
//! A path that no longer exists when its page is rendered becomes a
//! placeholder cell naming the path; so does a file that cannot be decoded.
//! Neither stops the run. [`generate`] wraps scan, render and save into the
//! single call the CLI uses.

use crate::config::ReportConfig;
use crate::document::{
    BackendError, CellContent, DocumentBackend, DocxBackend, EmbeddedImage, GridTable, PageSetup,
};
use crate::layout::{self, Cell, CellGeometry, Grid, PlanStep};
use crate::scan::{self, FolderGroup, ScanError};
use crate::week::WeekRange;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Output error: {0}")]
    Output(#[from] BackendError),
}

/// Why a cell shows text instead of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderReason {
    Missing,
    Unreadable,
}

/// A cell that fell back to placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub title: String,
    pub page_in_group: usize,
    pub cell: Cell,
    pub path: PathBuf,
    pub reason: PlaceholderReason,
}

impl Placeholder {
    /// Text written into the cell.
    pub fn text(&self) -> String {
        placeholder_text(&self.path, self.reason)
    }
}

/// Page count for one folder group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub title: String,
    pub images: usize,
    pub pages: usize,
}

/// What a render pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub week: WeekRange,
    pub folders: Vec<FolderSummary>,
    pub pages: usize,
    pub page_breaks: usize,
    pub embedded: usize,
    pub placeholders: Vec<Placeholder>,
    /// Set by [`generate`] once the document is written.
    pub output: Option<PathBuf>,
}

fn placeholder_text(path: &Path, reason: PlaceholderReason) -> String {
    match reason {
        PlaceholderReason::Missing => format!("Image not found: {}", path.display()),
        PlaceholderReason::Unreadable => format!("Image could not be read: {}", path.display()),
    }
}

/// Emit every page of every folder group into `backend`.
///
/// Does not save; the caller decides where the document goes.
pub fn render<B: DocumentBackend>(
    groups: &[FolderGroup],
    config: &ReportConfig,
    week: &WeekRange,
    backend: &mut B,
) -> RenderSummary {
    let grid = Grid::from_config(config);
    let geometry = CellGeometry::from_config(config);
    let label = week.label();

    let mut summary = RenderSummary {
        week: *week,
        folders: groups
            .iter()
            .map(|g| FolderSummary {
                title: g.title.clone(),
                images: g.images.len(),
                pages: layout::page_count(g.images.len(), grid.capacity()),
            })
            .collect(),
        pages: 0,
        page_breaks: 0,
        embedded: 0,
        placeholders: Vec::new(),
        output: None,
    };

    for step in layout::plan_pages(groups, &grid) {
        let page = match step {
            PlanStep::PageBreak => {
                backend.add_page_break();
                summary.page_breaks += 1;
                continue;
            }
            PlanStep::Page(page) => page,
        };
        backend.add_header_row(page.title, &label);
        backend.add_spacer();

        let mut table = GridTable::new(grid, geometry);
        for placement in grid.place(page.images) {
            let path = placement.item.as_path();
            let content = match cell_content(path, geometry.width) {
                Ok(image) => {
                    summary.embedded += 1;
                    CellContent::Image(image)
                }
                Err(reason) => {
                    let placeholder = Placeholder {
                        title: page.title.to_string(),
                        page_in_group: page.page_in_group,
                        cell: placement.cell,
                        path: path.to_path_buf(),
                        reason,
                    };
                    let text = placeholder.text();
                    summary.placeholders.push(placeholder);
                    CellContent::Placeholder(text)
                }
            };
            table.set(placement.cell, content);
        }
        backend.add_grid_table(table);
        summary.pages += 1;
    }

    summary
}

fn cell_content(path: &Path, width: f64) -> Result<EmbeddedImage, PlaceholderReason> {
    if !path.exists() {
        log::warn!("image not found: {}", path.display());
        return Err(PlaceholderReason::Missing);
    }
    EmbeddedImage::load(path, width).map_err(|e| {
        log::warn!("cannot embed {}: {e}", path.display());
        PlaceholderReason::Unreadable
    })
}

/// Scan, render and write the report described by `config`.
///
/// `today` picks the week shown in the page headers.
pub fn generate(config: &ReportConfig, today: NaiveDate) -> Result<RenderSummary, ReportError> {
    let groups = scan::scan(&config.image_base_folder)?;
    let week = WeekRange::containing(today);

    let mut backend = DocxBackend::new(PageSetup::from_config(config));
    let mut summary = render(&groups, config, &week, &mut backend);
    backend.save(&config.output_file)?;

    summary.output = Some(config.output_file.clone());
    Ok(summary)
}
