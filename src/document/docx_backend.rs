//! `.docx` backend built on `docx-rs`.
//!
//! ## Element mapping
//!
//! | Page element | WordprocessingML |
//! |---|---|
//! | Header row | 1×2 table, bold 0.3in runs, date cell right-aligned |
//! | Spacer | empty paragraph, 0.1in exact line, no spacing |
//! | Grid | rows×columns table, `single` outer border, `nil` inside borders |
//! | Grid cell | fixed width, minimum row height, centered both ways |
//! | Image | inline drawing, cell width, height from pixel aspect ratio |
//! | Page break | paragraph holding a `w:br w:type="page"` run |
//!
//! Page size is US Letter; all four margins come from `page_border_width`.

use super::backend::{BackendError, CellContent, DocumentBackend, EmbeddedImage, GridTable};
use super::units;
use crate::config::ReportConfig;
use crate::layout::Cell;
use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, LineSpacing, LineSpacingType, PageMargin,
    Paragraph, Pic, Run, Table, TableBorder, TableBorderPosition, TableCell, TableRow, VAlignType,
    WidthType,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Letter paper, in inches.
const PAPER_WIDTH: f64 = 8.5;
const PAPER_HEIGHT: f64 = 11.0;

const HEADER_FONT_SIZE: f64 = 0.3;
/// Border width in eighths of a point.
const BORDER_SIZE: usize = 4;

/// Page-level settings, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub paper_width: f64,
    pub paper_height: f64,
    pub margin: f64,
    /// Width of the content area the header row spans.
    pub content_width: f64,
}

impl PageSetup {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            paper_width: PAPER_WIDTH,
            paper_height: PAPER_HEIGHT,
            margin: config.page_border_width,
            content_width: config.page_width,
        }
    }
}

/// Builds a `.docx` document in memory and writes it on [`save`](DocumentBackend::save).
pub struct DocxBackend {
    docx: Docx,
    setup: PageSetup,
}

impl DocxBackend {
    pub fn new(setup: PageSetup) -> Self {
        Self {
            docx: blank_document(&setup),
            setup,
        }
    }

    fn append(&mut self, add: impl FnOnce(Docx) -> Docx) {
        let docx = std::mem::replace(&mut self.docx, Docx::new());
        self.docx = add(docx);
    }
}

fn blank_document(setup: &PageSetup) -> Docx {
    let margin = units::twips(setup.margin) as i32;
    Docx::new()
        .page_size(
            units::twips(setup.paper_width),
            units::twips(setup.paper_height),
        )
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
}

/// Single outer border, no inside gridlines.
fn outer_border_only(table: Table) -> Table {
    [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
    ]
    .into_iter()
    .fold(table, |table, position| {
        table.set_border(
            TableBorder::new(position)
                .border_type(BorderType::Single)
                .size(BORDER_SIZE),
        )
    })
    .clear_border(TableBorderPosition::InsideH)
    .clear_border(TableBorderPosition::InsideV)
}

fn header_paragraph(text: &str, align: AlignmentType) -> Paragraph {
    Paragraph::new()
        .add_run(
            Run::new()
                .add_text(text)
                .bold()
                .size(units::half_points(HEADER_FONT_SIZE)),
        )
        .align(align)
        // 0.01in before and after
        .line_spacing(LineSpacing::new().before(14).after(14))
}

fn image_run(image: EmbeddedImage) -> Run {
    let width = units::emu(image.width);
    let height = units::emu(image.height());
    let pic =
        Pic::new_with_dimensions(image.png, image.width_px, image.height_px).size(width, height);
    Run::new().add_image(pic)
}

fn grid_cell(content: Option<CellContent>, width_twips: usize) -> TableCell {
    let paragraph = Paragraph::new().align(AlignmentType::Center);
    let paragraph = match content {
        Some(CellContent::Image(image)) => paragraph.add_run(image_run(image)),
        Some(CellContent::Placeholder(text)) => paragraph.add_run(Run::new().add_text(text)),
        None => paragraph,
    };
    TableCell::new()
        .add_paragraph(paragraph)
        .vertical_align(VAlignType::Center)
        .width(width_twips, WidthType::Dxa)
}

impl DocumentBackend for DocxBackend {
    fn add_header_row(&mut self, title: &str, date_label: &str) {
        let half = units::twips(self.setup.content_width / 2.0) as usize;
        let row = TableRow::new(vec![
            TableCell::new()
                .add_paragraph(header_paragraph(title, AlignmentType::Left))
                .width(half, WidthType::Dxa),
            TableCell::new()
                .add_paragraph(header_paragraph(date_label, AlignmentType::Right))
                .width(half, WidthType::Dxa),
        ]);
        let table = outer_border_only(Table::new(vec![row]).set_grid(vec![half, half]));
        self.append(|docx| docx.add_table(table));
    }

    fn add_spacer(&mut self) {
        // 0.1in exact line, no spacing around it
        let spacer = Paragraph::new().line_spacing(
            LineSpacing::new()
                .before(0)
                .after(0)
                .line(144)
                .line_rule(LineSpacingType::Exact),
        );
        self.append(|docx| docx.add_paragraph(spacer));
    }

    fn add_grid_table(&mut self, table: GridTable) {
        let GridTable {
            grid,
            geometry,
            mut cells,
        } = table;
        let cell_width = units::twips(geometry.width) as usize;
        let row_height = units::twips(geometry.height) as f32;

        let mut rows = Vec::with_capacity(grid.rows);
        for row in 0..grid.rows {
            let mut row_cells = Vec::with_capacity(grid.columns);
            for column in 0..grid.columns {
                let cell = Cell { row, column };
                let content = cells
                    .iter()
                    .position(|(c, _)| *c == cell)
                    .map(|i| cells.swap_remove(i).1);
                row_cells.push(grid_cell(content, cell_width));
            }
            rows.push(TableRow::new(row_cells).row_height(row_height));
        }

        let table = outer_border_only(Table::new(rows).set_grid(vec![cell_width; grid.columns]));
        self.append(|docx| docx.add_table(table));
    }

    fn add_page_break(&mut self) {
        let page_break = Paragraph::new().add_run(Run::new().add_break(BreakType::Page));
        self.append(|docx| docx.add_paragraph(page_break));
    }

    fn save(&mut self, path: &Path) -> Result<(), BackendError> {
        let docx = std::mem::replace(&mut self.docx, blank_document(&self.setup));
        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| BackendError::Pack(e.to_string()))?;
        fs::write(path, buffer.into_inner())?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
