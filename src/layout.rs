//! Pagination and grid placement.
//!
//! Everything here is pure arithmetic over the config and the scanned folder
//! groups; no I/O happens in this module.
//!
//! ## Pagination
//!
//! A folder with `n` images on a grid of capacity `c = rows × columns` fills
//! `ceil(n / c)` pages. A folder with no images fills none: it gets no header
//! and no grid.
//!
//! ## Placement
//!
//! Images fill a page row-major: local index `i` lands in
//! `(i / columns, i % columns)`.
//!
//! ```text
//! columns = 3, rows = 2
//!
//! ┌───┬───┬───┐
//! │ 0 │ 1 │ 2 │
//! ├───┼───┼───┤
//! │ 3 │ 4 │ 5 │
//! └───┴───┴───┘
//! ```
//!
//! ## Page Breaks
//!
//! Every folder after the first opens with a page break, and every further
//! page of a folder is preceded by one. The break belongs to the folder, so an
//! empty folder still contributes its break:
//!
//! ```text
//! A (1 image), Empty, B (1 image)  →  page A, break, break, page B
//! ```
//!
//! With no empty folders this is exactly one break between each pair of
//! consecutive pages.

use crate::config::ReportConfig;
use crate::scan::FolderGroup;
use std::path::PathBuf;

/// Grid shape for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
}

/// A `(row, column)` position on a page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

/// An item assigned to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a, T> {
    pub cell: Cell,
    pub item: &'a T,
}

impl Grid {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            columns: config.images_per_row as usize,
            rows: config.images_per_column as usize,
        }
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Row-major cell for a page-local index, `None` if it falls off the grid.
    pub fn cell_for(&self, index: usize) -> Option<Cell> {
        if self.columns == 0 {
            return None;
        }
        let cell = Cell {
            row: index / self.columns,
            column: index % self.columns,
        };
        (cell.row < self.rows && cell.column < self.columns).then_some(cell)
    }

    /// Assign each item of one page to its cell, skipping any that do not fit.
    pub fn place<'a, T>(&self, page: &'a [T]) -> Vec<Placement<'a, T>> {
        page.iter()
            .enumerate()
            .filter_map(|(i, item)| self.cell_for(i).map(|cell| Placement { cell, item }))
            .collect()
    }
}

/// Number of pages needed for `n` items at `capacity` items per page.
pub fn page_count(n: usize, capacity: usize) -> usize {
    if n == 0 || capacity == 0 {
        0
    } else {
        n.div_ceil(capacity)
    }
}

/// Split `items` into consecutive pages of at most `capacity` items.
pub fn paginate<T>(items: &[T], capacity: usize) -> Vec<&[T]> {
    if capacity == 0 {
        return Vec::new();
    }
    items.chunks(capacity).collect()
}

/// Cell size in inches, shared by every cell of every page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub width: f64,
    pub height: f64,
}

impl CellGeometry {
    pub fn from_config(config: &ReportConfig) -> Self {
        let (width, height) = config.cell_size();
        Self { width, height }
    }
}

/// One page of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPage<'a> {
    pub title: &'a str,
    /// Page number within its folder, 0-based.
    pub page_in_group: usize,
    pub images: &'a [PathBuf],
}

/// One element of the document plan, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanStep<'a> {
    PageBreak,
    Page(PlannedPage<'a>),
}

/// Lay out every folder group into pages and page breaks, in order.
///
/// Every group after the first opens with a break, even one with no pages;
/// further pages of the same group get their own break.
pub fn plan_pages<'a>(groups: &'a [FolderGroup], grid: &Grid) -> Vec<PlanStep<'a>> {
    let mut steps = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        if group_index > 0 {
            steps.push(PlanStep::PageBreak);
        }
        for (page_in_group, images) in paginate(&group.images, grid.capacity())
            .into_iter()
            .enumerate()
        {
            if page_in_group > 0 {
                steps.push(PlanStep::PageBreak);
            }
            steps.push(PlanStep::Page(PlannedPage {
                title: &group.title,
                page_in_group,
                images,
            }));
        }
    }
    steps
}
