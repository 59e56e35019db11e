//! # Weekly Grid
//!
//! Turns a folder of photo folders into a weekly `.docx` report. Every
//! subfolder becomes a section: its photos are tiled into a fixed
//! rows × columns grid, as many pages as it takes, and every page carries
//! the folder name and the current week (`MM/DD ~ MM/DD`) as a header.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Config    config.toml  →  ReportConfig        (flat settings, validated)
//! 2. Scan      photos/      →  Vec<FolderGroup>    (subfolders + image paths)
//! 3. Layout    groups       →  pages and cells     (pure arithmetic)
//! 4. Render    pages        →  DocumentBackend     (header, spacer, grid, breaks)
//! 5. Save      backend      →  weekly.docx
//! ```
//!
//! Nothing runs concurrently and nothing is cached between runs: the output
//! file is rebuilt from scratch and overwritten every time.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Loads and validates the eight required settings (TOML or JSON) |
//! | [`scan`] | Lists subfolders and their `.jpg`/`.png`/`.jpeg` files |
//! | [`layout`] | Pagination, row-major cell placement, cell geometry, page-break plan |
//! | [`week`] | Sunday-to-Saturday week label for a given date |
//! | [`render`] | Drives a backend page by page; missing images become placeholders |
//! | [`document`] | [`document::DocumentBackend`] trait and the `docx-rs` implementation |
//! | [`output`] | CLI output formatting |
//! | [`logger`] | stderr logger for `log` diagnostics |
//!
//! # Design Decisions
//!
//! ## Backend Behind a Trait
//!
//! The renderer only knows five operations: header row, spacer, grid table,
//! page break, save. Tests run the whole page emission against a recording
//! backend and assert on what it was asked to draw; only the `docx-rs`
//! backend knows about twips, EMUs and border XML.
//!
//! ## Failure Is Per Image, Not Per Run
//!
//! A photo deleted between scan and render, or a file that is not really an
//! image, turns into a text cell naming the path. The run only fails on bad
//! configuration, an unreadable base folder, or an unwritable output path.
//!
//! ## Deterministic Order
//!
//! Folders and files are sorted by name, so the same tree always produces
//! the same document regardless of the platform's directory order.

pub mod config;
pub mod document;
pub mod layout;
pub mod logger;
pub mod output;
pub mod render;
pub mod scan;
pub mod week;

#[cfg(test)]
pub(crate) mod test_helpers;
