//! Layout and styling table for the rendered reports.
//!
//! Every visual constant the PDF and XLSX renderers use lives here so the
//! document contract can be inspected and tested apart from data fetching.

/// Points per inch in PDF user space
pub const INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub fn hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Components scaled to 0.0..=1.0
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

pub mod palette {
    use super::RgbColor;

    pub const BLACK: RgbColor = RgbColor::from_hex(0x000000);
    pub const WHITE: RgbColor = RgbColor::from_hex(0xFFFFFF);
    pub const GREY: RgbColor = RgbColor::from_hex(0x808080);
    pub const LIGHT_GREY: RgbColor = RgbColor::from_hex(0xD3D3D3);
    pub const WHITESMOKE: RgbColor = RgbColor::from_hex(0xF5F5F5);
    pub const BEIGE: RgbColor = RgbColor::from_hex(0xF5F5DC);
    pub const DARK_BLUE: RgbColor = RgbColor::from_hex(0x00008B);
    pub const HEADER_BLUE: RgbColor = RgbColor::from_hex(0x366092);
    pub const TOTAL_GREY: RgbColor = RgbColor::from_hex(0xD9D9D9);
}

/// User-facing text of both documents
#[derive(Debug, Clone)]
pub struct ReportLabels {
    pub report_title: &'static str,
    pub generated_at_prefix: &'static str,
    pub summary_heading: &'static str,
    pub detail_heading: &'static str,
    pub summary_headers: Vec<&'static str>,
    pub detail_headers: Vec<&'static str>,
    pub total_label: &'static str,
    pub summary_sheet_name: &'static str,
    pub detail_sheet_name: &'static str,
    pub summary_sheet_title: &'static str,
    pub detail_sheet_title: &'static str,
    pub filename_prefix: &'static str,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            report_title: "Relatório de Contagem de Estoque",
            generated_at_prefix: "Gerado em:",
            summary_heading: "Resumo por Produto",
            detail_heading: "Detalhamento por Lote",
            summary_headers: vec!["Código", "Produto", "Total"],
            detail_headers: vec!["Código", "Produto", "Lote", "Validade", "Quantidade"],
            total_label: "TOTAL GERAL:",
            summary_sheet_name: "Resumo por Produto",
            detail_sheet_name: "Detalhado por Lote",
            summary_sheet_title: "Relatório de Contagem de Estoque - Resumo",
            detail_sheet_title: "Relatório de Contagem de Estoque - Detalhado",
            filename_prefix: "relatorio_estoque",
        }
    }
}

/// Page geometry in points
#[derive(Debug, Clone)]
pub struct PageStyle {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageStyle {
    /// A4 with 1in side and top margins and a 0.25in bottom margin
    pub fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin_left: INCH,
            margin_right: INCH,
            margin_top: INCH,
            margin_bottom: 18.0,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

#[derive(Debug, Clone)]
pub struct PdfTableStyle {
    pub column_widths: Vec<f32>,
    pub header_font_size: f32,
    pub body_font_size: f32,
    pub cell_padding: f32,
    pub header_bottom_padding: f32,
    pub header_fill: RgbColor,
    pub header_text: RgbColor,
    pub body_fill: RgbColor,
    pub total_fill: RgbColor,
    pub grid_color: RgbColor,
    pub grid_width: f32,
}

impl PdfTableStyle {
    fn with_widths(column_widths: Vec<f32>, header_font_size: f32, body_font_size: f32) -> Self {
        Self {
            column_widths,
            header_font_size,
            body_font_size,
            cell_padding: 3.0,
            header_bottom_padding: 12.0,
            header_fill: palette::GREY,
            header_text: palette::WHITESMOKE,
            body_fill: palette::BEIGE,
            total_fill: palette::LIGHT_GREY,
            grid_color: palette::BLACK,
            grid_width: 1.0,
        }
    }

    pub fn table_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }
}

#[derive(Debug, Clone)]
pub struct PdfStyle {
    pub page: PageStyle,
    pub title_font_size: f32,
    pub title_space_after: f32,
    pub text_font_size: f32,
    pub heading_font_size: f32,
    pub heading_color: RgbColor,
    pub heading_space_after: f32,
    pub space_after_timestamp: f32,
    pub space_between_tables: f32,
    pub text_color: RgbColor,
    pub summary_table: PdfTableStyle,
    pub detail_table: PdfTableStyle,
    /// Product names above this many characters are cut in the detail table
    pub name_max_chars: usize,
    pub ellipsis: &'static str,
}

impl Default for PdfStyle {
    fn default() -> Self {
        Self {
            page: PageStyle::a4(),
            title_font_size: 18.0,
            title_space_after: 30.0,
            text_font_size: 10.0,
            heading_font_size: 14.0,
            heading_color: palette::DARK_BLUE,
            heading_space_after: 12.0,
            space_after_timestamp: 20.0,
            space_between_tables: 30.0,
            text_color: palette::BLACK,
            summary_table: PdfTableStyle::with_widths(
                vec![1.5 * INCH, 3.0 * INCH, 1.0 * INCH],
                12.0,
                10.0,
            ),
            detail_table: PdfTableStyle::with_widths(
                vec![1.0 * INCH, 2.5 * INCH, 1.0 * INCH, 0.8 * INCH, 0.7 * INCH],
                10.0,
                9.0,
            ),
            name_max_chars: 25,
            ellipsis: "...",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SheetStyle {
    pub column_widths: Vec<f64>,
    /// Zero-based columns whose data cells are centered
    pub centered_columns: Vec<u16>,
}

#[derive(Debug, Clone)]
pub struct XlsxStyle {
    pub title_font_size: f64,
    pub header_text: RgbColor,
    pub header_fill: RgbColor,
    pub total_fill: RgbColor,
    /// Zero-based row of the table header; data follows directly below
    pub header_row: u32,
    pub summary_sheet: SheetStyle,
    pub detail_sheet: SheetStyle,
}

impl Default for XlsxStyle {
    fn default() -> Self {
        Self {
            title_font_size: 14.0,
            header_text: palette::WHITE,
            header_fill: palette::HEADER_BLUE,
            total_fill: palette::TOTAL_GREY,
            header_row: 3,
            summary_sheet: SheetStyle {
                column_widths: vec![15.0, 40.0, 12.0],
                centered_columns: vec![2],
            },
            detail_sheet: SheetStyle {
                column_widths: vec![15.0, 40.0, 15.0, 12.0, 12.0],
                centered_columns: vec![3, 4],
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportStyle {
    pub labels: ReportLabels,
    pub pdf: PdfStyle,
    pub xlsx: XlsxStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_round_trip() {
        let color = RgbColor::from_hex(0x366092);
        assert_eq!((color.r, color.g, color.b), (0x36, 0x60, 0x92));
        assert_eq!(color.hex(), 0x366092);
        assert_eq!(palette::WHITE.unit(), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_column_counts_match_headers() {
        let style = ReportStyle::default();
        let summary_columns = style.labels.summary_headers.len();
        let detail_columns = style.labels.detail_headers.len();

        assert_eq!(style.pdf.summary_table.column_widths.len(), summary_columns);
        assert_eq!(style.pdf.detail_table.column_widths.len(), detail_columns);
        assert_eq!(style.xlsx.summary_sheet.column_widths.len(), summary_columns);
        assert_eq!(style.xlsx.detail_sheet.column_widths.len(), detail_columns);
    }

    #[test]
    fn test_pdf_tables_fit_inside_frame() {
        let style = PdfStyle::default();
        let frame = style.page.frame_width();

        assert!(style.summary_table.table_width() <= frame);
        assert!(style.detail_table.table_width() <= frame);
        assert_eq!(style.summary_table.table_width(), 5.5 * INCH);
    }

    #[test]
    fn test_centered_columns_exist() {
        let style = XlsxStyle::default();
        for sheet in [&style.summary_sheet, &style.detail_sheet] {
            for column in &sheet.centered_columns {
                assert!((*column as usize) < sheet.column_widths.len());
            }
        }
    }
}
