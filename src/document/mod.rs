//! Word-processor output.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Header row, grid table, page break** | `docx-rs` builders |
//! | **Image decode + PNG re-encode** | `image` crate |
//! | **Write `.docx`** | `docx_rs::Docx::build().pack` |
//!
//! The module is split into:
//! - **Units**: Pure inch → twip / EMU / half-point conversions (unit testable)
//! - **Backend**: [`DocumentBackend`] trait and the table/cell descriptions it consumes
//! - **Docx**: [`DocxBackend`], the `docx-rs` implementation

pub mod backend;
pub mod docx_backend;
pub(crate) mod units;

pub use backend::{BackendError, CellContent, DocumentBackend, EmbeddedImage, GridTable};
pub use docx_backend::{DocxBackend, PageSetup};
