//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Folders (3 columns × 2 rows, 6 per page)
//! 001 Kitchen (7 photos, 2 pages)
//!     Source: photos/Kitchen
//!     Page 1
//!         (1,1) 01.jpg
//!         ...
//!     Page 2
//!         (1,1) 07.jpg
//! 002 Empty (0 photos, 0 pages)
//!     Source: photos/Empty
//! ```
//!
//! ## Build
//!
//! ```text
//! Week 03/09 ~ 03/15
//! 001 Kitchen → 2 pages
//! 002 Empty → skipped, no images
//!
//! Placeholders
//!     Kitchen page 1 (1,2): Image not found: photos/Kitchen/02.jpg
//!
//! Generated 2 pages, 6 images, 1 placeholder → weekly.docx
//! ```
//!
//! Cell positions are printed 1-based as `(row,column)`.

use crate::layout::{self, Cell, Grid};
use crate::render::RenderSummary;
use crate::scan::FolderGroup;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn cell_label(cell: Cell) -> String {
    format!("({},{})", cell.row + 1, cell.column + 1)
}

// ============================================================================
// check
// ============================================================================

/// Format the page plan for the scanned folders without rendering anything.
pub fn format_scan_output(groups: &[FolderGroup], grid: &Grid) -> Vec<String> {
    let mut lines = vec![format!(
        "Folders ({} × {}, {} per page)",
        plural(grid.columns, "column"),
        plural(grid.rows, "row"),
        grid.capacity()
    )];

    if groups.is_empty() {
        lines.push(format!("{}(no subfolders)", indent(1)));
        return lines;
    }

    for (i, group) in groups.iter().enumerate() {
        let pages = layout::paginate(&group.images, grid.capacity());
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            group.title,
            plural(group.images.len(), "photo"),
            plural(pages.len(), "page")
        ));
        lines.push(format!("{}Source: {}", indent(1), group.path.display()));

        for (page_number, page) in pages.iter().enumerate() {
            lines.push(format!("{}Page {}", indent(1), page_number + 1));
            for placement in grid.place(page) {
                let name = placement
                    .item
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                lines.push(format!(
                    "{}{} {}",
                    indent(2),
                    cell_label(placement.cell),
                    name
                ));
            }
        }
    }
    lines
}

pub fn print_scan_output(groups: &[FolderGroup], grid: &Grid) {
    for line in format_scan_output(groups, grid) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the result of a render pass.
pub fn format_render_output(summary: &RenderSummary) -> Vec<String> {
    let mut lines = vec![format!("Week {}", summary.week)];

    for (i, folder) in summary.folders.iter().enumerate() {
        let detail = if folder.pages == 0 {
            "skipped, no images".to_string()
        } else {
            plural(folder.pages, "page")
        };
        lines.push(format!("{} {} → {}", format_index(i + 1), folder.title, detail));
    }

    if !summary.placeholders.is_empty() {
        lines.push(String::new());
        lines.push("Placeholders".to_string());
        for placeholder in &summary.placeholders {
            lines.push(format!(
                "{}{} page {} {}: {}",
                indent(1),
                placeholder.title,
                placeholder.page_in_group + 1,
                cell_label(placeholder.cell),
                placeholder.text()
            ));
        }
    }

    lines.push(String::new());
    let mut totals = format!(
        "Generated {}, {}, {}",
        plural(summary.pages, "page"),
        plural(summary.embedded, "image"),
        plural(summary.placeholders.len(), "placeholder")
    );
    if let Some(output) = &summary.output {
        totals.push_str(&format!(" → {}", output.display()));
    }
    lines.push(totals);
    lines
}

pub fn print_render_output(summary: &RenderSummary) {
    for line in format_render_output(summary) {
        println!("{}", line);
    }
}
