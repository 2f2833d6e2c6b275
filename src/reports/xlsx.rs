use super::format::generated_at_line;
use super::layout::{CellValue, RowKind, TableLayout, detail_table, summary_table};
use super::style::{ReportStyle, SheetStyle, XlsxStyle};
use super::{ReportData, ReportError};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

impl From<XlsxError> for ReportError {
    fn from(err: XlsxError) -> Self {
        ReportError::Spreadsheet(err.to_string())
    }
}

/// Cell formats shared by both sheets
struct SheetFormats {
    title: Format,
    plain: Format,
    header: Format,
    body: Format,
    body_centered: Format,
    total: Format,
    total_centered: Format,
}

impl SheetFormats {
    fn new(style: &XlsxStyle) -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        let total = bordered
            .clone()
            .set_bold()
            .set_background_color(Color::RGB(style.total_fill.hex()));

        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(style.title_font_size),
            plain: Format::new(),
            header: bordered
                .clone()
                .set_bold()
                .set_font_color(Color::RGB(style.header_text.hex()))
                .set_background_color(Color::RGB(style.header_fill.hex()))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            body_centered: bordered
                .clone()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            body: bordered,
            total_centered: total
                .clone()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            total,
        }
    }
}

/// Builds the two-sheet workbook: per-product summary and per-batch detail
pub fn render_xlsx(data: &ReportData, style: &ReportStyle) -> Result<Vec<u8>, ReportError> {
    let labels = &style.labels;
    let formats = SheetFormats::new(&style.xlsx);
    let generated_at = generated_at_line(labels.generated_at_prefix, &data.generated_at);

    let summary = summary_table(&data.summary, labels);
    // The sheet keeps full product names
    let detail = detail_table(&data.detail, labels, None)?;

    let mut workbook = Workbook::new();
    workbook.push_worksheet(build_sheet(
        labels.summary_sheet_name,
        labels.summary_sheet_title,
        &generated_at,
        &summary,
        &style.xlsx.summary_sheet,
        &style.xlsx,
        &formats,
    )?);
    workbook.push_worksheet(build_sheet(
        labels.detail_sheet_name,
        labels.detail_sheet_title,
        &generated_at,
        &detail,
        &style.xlsx.detail_sheet,
        &style.xlsx,
        &formats,
    )?);

    Ok(workbook.save_to_buffer()?)
}

fn build_sheet(
    name: &str,
    title: &str,
    generated_at: &str,
    table: &TableLayout,
    sheet_style: &SheetStyle,
    style: &XlsxStyle,
    formats: &SheetFormats,
) -> Result<Worksheet, ReportError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;

    let last_col = table.column_count().saturating_sub(1) as u16;
    sheet.merge_range(0, 0, 0, last_col, title, &formats.title)?;
    sheet.merge_range(1, 0, 1, last_col, generated_at, &formats.plain)?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(style.header_row, col as u16, header, &formats.header)?;
    }

    for (offset, row) in table.rows.iter().enumerate() {
        let row_index = style.header_row + 1 + offset as u32;
        for (col, value) in row.cells.iter().enumerate() {
            let col = col as u16;
            let centered = sheet_style.centered_columns.contains(&col);
            let format = match (row.kind, centered) {
                (RowKind::Body, false) => &formats.body,
                (RowKind::Body, true) => &formats.body_centered,
                // Only the label and value cells of the total row are highlighted
                (RowKind::Total, _) if matches!(value, CellValue::Empty) => &formats.body,
                (RowKind::Total, false) => &formats.total,
                (RowKind::Total, true) => &formats.total_centered,
            };
            write_cell(&mut sheet, row_index, col, value, format)?;
        }
    }

    for (col, width) in sheet_style.column_widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    Ok(sheet)
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: &Format,
) -> Result<(), XlsxError> {
    match value {
        CellValue::Text(text) => sheet.write_string_with_format(row, col, text, format)?,
        CellValue::Integer(number) => {
            sheet.write_number_with_format(row, col, *number as f64, format)?
        }
        CellValue::Empty => sheet.write_blank(row, col, format)?,
    };
    Ok(())
}
