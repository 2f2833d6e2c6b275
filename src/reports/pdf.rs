use super::format::generated_at_line;
use super::layout::{RowKind, TableLayout, detail_table, summary_table};
use super::style::{PdfStyle, PdfTableStyle, ReportStyle, RgbColor};
use super::{ReportData, ReportError};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};

/// Line height relative to font size
const LEADING: f32 = 1.2;

/// Rough advance width of Helvetica glyphs, in ems
const REGULAR_GLYPH_WIDTH: f32 = 0.52;
const BOLD_GLYPH_WIDTH: f32 = 0.56;

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn pdf_color(color: RgbColor) -> Color {
    let (r, g, b) = color.unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn text_width(text: &str, font_size: f32, bold: bool) -> f32 {
    let glyph = if bold {
        BOLD_GLYPH_WIDTH
    } else {
        REGULAR_GLYPH_WIDTH
    };
    text.chars().count() as f32 * font_size * glyph
}

fn pdf_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(err.to_string())
}

/// Renders the summary and detail tables as an A4 document
pub fn render_pdf(data: &ReportData, style: &ReportStyle) -> Result<Vec<u8>, ReportError> {
    let canvas = draw_report(data, style)?;
    tracing::debug!(
        pages = canvas.pages,
        rows = canvas.drawn.len(),
        "PDF layout complete"
    );
    canvas.finish()
}

fn draw_report<'a>(data: &ReportData, style: &'a ReportStyle) -> Result<PdfCanvas<'a>, ReportError> {
    let labels = &style.labels;
    let pdf = &style.pdf;

    let summary = summary_table(&data.summary, labels);
    let detail = detail_table(
        &data.detail,
        labels,
        Some((pdf.name_max_chars, pdf.ellipsis)),
    )?;

    let mut canvas = PdfCanvas::new(labels.report_title, pdf)?;

    canvas.centered_line(labels.report_title, pdf.title_font_size, true, pdf.text_color);
    canvas.skip(pdf.title_space_after);
    canvas.line(
        &generated_at_line(labels.generated_at_prefix, &data.generated_at),
        pdf.text_font_size,
        false,
        pdf.text_color,
    );
    canvas.skip(pdf.space_after_timestamp);

    canvas.line(
        labels.summary_heading,
        pdf.heading_font_size,
        true,
        pdf.heading_color,
    );
    canvas.skip(pdf.heading_space_after);
    canvas.table(&summary, &pdf.summary_table);
    canvas.skip(pdf.space_between_tables);

    canvas.line(
        labels.detail_heading,
        pdf.heading_font_size,
        true,
        pdf.heading_color,
    );
    canvas.skip(pdf.heading_space_after);
    canvas.table(&detail, &pdf.detail_table);

    Ok(canvas)
}

/// How one table row is painted
struct RowPaint {
    font_size: f32,
    bold: bool,
    fill: RgbColor,
    text_color: RgbColor,
    bottom_padding: f32,
}

/// Text of a table row as laid out; `table` and `page` count from 1
#[derive(Debug, Clone, PartialEq, Eq)]
struct DrawnRow {
    table: usize,
    page: usize,
    cells: Vec<String>,
}

/// Top-down flow layout over printpdf pages; `cursor` is the distance in
/// points from the bottom edge of the current page.
struct PdfCanvas<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    style: &'a PdfStyle,
    cursor: f32,
    pages: usize,
    tables: usize,
    drawn: Vec<DrawnRow>,
}

impl<'a> PdfCanvas<'a> {
    fn new(title: &str, style: &'a PdfStyle) -> Result<Self, ReportError> {
        let page = &style.page;
        let (doc, page_index, layer_index) =
            PdfDocument::new(title, mm(page.width), mm(page.height), "Page 1, Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let layer = doc.get_page(page_index).get_layer(layer_index);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            style,
            cursor: page.height - page.margin_top,
            pages: 1,
            tables: 0,
            drawn: Vec::new(),
        })
    }

    fn new_page(&mut self) {
        let page = &self.style.page;
        self.pages += 1;
        let (page_index, layer_index) = self.doc.add_page(
            mm(page.width),
            mm(page.height),
            format!("Page {}, Layer 1", self.pages),
        );
        self.layer = self.doc.get_page(page_index).get_layer(layer_index);
        self.cursor = page.height - page.margin_top;
    }

    /// Moves to a fresh page unless `height` fits above the bottom margin
    fn reserve(&mut self, height: f32) {
        if self.cursor - height < self.style.page.margin_bottom {
            self.new_page();
        }
    }

    fn skip(&mut self, height: f32) {
        if self.cursor - height < self.style.page.margin_bottom {
            self.new_page();
        } else {
            self.cursor -= height;
        }
    }

    fn font(&self, bold: bool) -> &IndirectFontRef {
        if bold { &self.bold } else { &self.regular }
    }

    fn text(&self, text: &str, font_size: f32, bold: bool, color: RgbColor, x: f32, y: f32) {
        self.layer.set_fill_color(pdf_color(color));
        self.layer
            .use_text(text, font_size, mm(x), mm(y), self.font(bold));
    }

    fn line(&mut self, text: &str, font_size: f32, bold: bool, color: RgbColor) {
        let height = font_size * LEADING;
        self.reserve(height);
        self.cursor -= height;
        let x = self.style.page.margin_left;
        self.text(text, font_size, bold, color, x, self.cursor);
    }

    fn centered_line(&mut self, text: &str, font_size: f32, bold: bool, color: RgbColor) {
        let height = font_size * LEADING;
        self.reserve(height);
        self.cursor -= height;
        let page = &self.style.page;
        let x = page.margin_left + (page.frame_width() - text_width(text, font_size, bold)) / 2.0;
        self.text(text, font_size, bold, color, x, self.cursor);
    }

    fn cell(&self, x: f32, y: f32, width: f32, height: f32, fill: RgbColor, table: &PdfTableStyle) {
        self.layer.set_fill_color(pdf_color(fill));
        self.layer.set_outline_color(pdf_color(table.grid_color));
        self.layer.set_outline_thickness(table.grid_width);
        self.layer.add_rect(
            Rect::new(mm(x), mm(y), mm(x + width), mm(y + height)).with_mode(PaintMode::FillStroke),
        );
    }

    fn row(&mut self, cells: &[String], table: &PdfTableStyle, paint: RowPaint) {
        let height = paint.font_size * LEADING + table.cell_padding + paint.bottom_padding;
        self.reserve(height);
        self.cursor -= height;

        let page = &self.style.page;
        let mut x = page.margin_left + (page.frame_width() - table.table_width()) / 2.0;
        let baseline = self.cursor + paint.bottom_padding + paint.font_size * 0.25;

        for (text, width) in cells.iter().zip(&table.column_widths) {
            self.cell(x, self.cursor, *width, height, paint.fill, table);
            let text_x = x + (width - text_width(text, paint.font_size, paint.bold)) / 2.0;
            self.text(text, paint.font_size, paint.bold, paint.text_color, text_x, baseline);
            x += width;
        }

        self.drawn.push(DrawnRow {
            table: self.tables,
            page: self.pages,
            cells: cells.to_vec(),
        });
    }

    /// Draws the header row, then body and total rows, breaking pages between rows
    fn table(&mut self, layout: &TableLayout, table: &PdfTableStyle) {
        self.tables += 1;
        self.row(
            &layout.headers,
            table,
            RowPaint {
                font_size: table.header_font_size,
                bold: true,
                fill: table.header_fill,
                text_color: table.header_text,
                bottom_padding: table.header_bottom_padding,
            },
        );

        let text_color = self.style.text_color;
        for row in &layout.rows {
            let cells: Vec<String> = row.cells.iter().map(|cell| cell.display()).collect();
            let (fill, bold) = match row.kind {
                RowKind::Body => (table.body_fill, false),
                RowKind::Total => (table.total_fill, true),
            };
            self.row(
                &cells,
                table,
                RowPaint {
                    font_size: table.body_font_size,
                    bold,
                    fill,
                    text_color,
                    bottom_padding: table.cell_padding,
                },
            );
        }
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}
