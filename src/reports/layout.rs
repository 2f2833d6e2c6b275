//! Format-neutral table contents shared by the PDF and XLSX renderers

use super::ReportError;
use super::format::{format_expiry, truncate_name};
use super::style::ReportLabels;
use crate::database::{DetailRow, SummaryRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Empty,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Integer(value) => value.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Body,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub kind: RowKind,
    pub cells: Vec<CellValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableLayout {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Sum of the already aggregated per-product totals
pub fn grand_total(rows: &[SummaryRow]) -> i64 {
    rows.iter().map(|row| row.total_quantity).sum()
}

/// One row per product followed by the grand total row
pub fn summary_table(rows: &[SummaryRow], labels: &ReportLabels) -> TableLayout {
    let mut table_rows: Vec<TableRow> = rows
        .iter()
        .map(|row| TableRow {
            kind: RowKind::Body,
            cells: vec![
                CellValue::Text(row.code.clone()),
                CellValue::Text(row.name.clone()),
                CellValue::Integer(row.total_quantity),
            ],
        })
        .collect();

    table_rows.push(TableRow {
        kind: RowKind::Total,
        cells: vec![
            CellValue::Empty,
            CellValue::Text(labels.total_label.to_string()),
            CellValue::Integer(grand_total(rows)),
        ],
    });

    TableLayout {
        headers: labels.summary_headers.iter().map(|h| h.to_string()).collect(),
        rows: table_rows,
    }
}

/// One row per count record; names are cut when `name_limit` is set
pub fn detail_table(
    rows: &[DetailRow],
    labels: &ReportLabels,
    name_limit: Option<(usize, &str)>,
) -> Result<TableLayout, ReportError> {
    let table_rows = rows
        .iter()
        .map(|row| {
            let name = match name_limit {
                Some((max_chars, ellipsis)) => {
                    truncate_name(&row.name, max_chars, ellipsis).into_owned()
                }
                None => row.name.clone(),
            };

            Ok(TableRow {
                kind: RowKind::Body,
                cells: vec![
                    CellValue::Text(row.code.clone()),
                    CellValue::Text(name),
                    CellValue::Text(row.batch.clone()),
                    CellValue::Text(format_expiry(row.expiry_month, row.expiry_year)?),
                    CellValue::Integer(row.quantity.into()),
                ],
            })
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    Ok(TableLayout {
        headers: labels.detail_headers.iter().map(|h| h.to_string()).collect(),
        rows: table_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_row(code: &str, name: &str, total: i64) -> SummaryRow {
        SummaryRow {
            code: code.to_string(),
            name: name.to_string(),
            total_quantity: total,
        }
    }

    fn detail_row(code: &str, name: &str, batch: &str, month: i32, quantity: i32) -> DetailRow {
        DetailRow {
            code: code.to_string(),
            name: name.to_string(),
            batch: batch.to_string(),
            expiry_month: month,
            expiry_year: 2024,
            quantity,
        }
    }

    #[test]
    fn test_summary_table_appends_single_total_row() {
        let labels = ReportLabels::default();
        let rows = vec![summary_row("001", "A", 15), summary_row("003", "C", 7)];

        let table = summary_table(&rows, &labels);

        assert_eq!(table.headers, vec!["Código", "Produto", "Total"]);
        assert_eq!(table.rows.len(), 3);

        let totals: Vec<_> = table
            .rows
            .iter()
            .filter(|row| row.kind == RowKind::Total)
            .collect();
        assert_eq!(totals.len(), 1);
        assert_eq!(
            totals[0].cells,
            vec![
                CellValue::Empty,
                CellValue::Text("TOTAL GERAL:".to_string()),
                CellValue::Integer(22),
            ]
        );
        assert_eq!(table.rows.last().map(|r| r.kind), Some(RowKind::Total));
    }

    #[test]
    fn test_summary_table_empty_store_totals_zero() {
        let table = summary_table(&[], &ReportLabels::default());

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[2], CellValue::Integer(0));
    }

    #[test]
    fn test_detail_table_formats_expiry_and_truncates() {
        let labels = ReportLabels::default();
        let long_name = "Soro fisiologico 0,9% 500ml";
        let rows = vec![
            detail_row("001", long_name, "L1", 1, 10),
            detail_row("002", "Curto", "L7", 12, 3),
        ];

        let table = detail_table(&rows, &labels, Some((25, "..."))).unwrap();

        assert_eq!(table.column_count(), 5);
        assert_eq!(
            table.rows[0].cells[1],
            CellValue::Text("Soro fisiologico 0,9% 500...".to_string())
        );
        assert_eq!(table.rows[0].cells[3], CellValue::Text("Jan/2024".to_string()));
        assert_eq!(table.rows[1].cells[1], CellValue::Text("Curto".to_string()));
        assert_eq!(table.rows[1].cells[3], CellValue::Text("Dez/2024".to_string()));
        assert_eq!(table.rows[1].cells[4], CellValue::Integer(3));
        assert!(table.rows.iter().all(|row| row.kind == RowKind::Body));
    }

    #[test]
    fn test_detail_table_without_limit_keeps_full_name() {
        let long_name = "Soro fisiologico 0,9% 500ml";
        let rows = vec![detail_row("001", long_name, "L1", 5, 1)];

        let table = detail_table(&rows, &ReportLabels::default(), None).unwrap();

        assert_eq!(table.rows[0].cells[1], CellValue::Text(long_name.to_string()));
    }

    #[test]
    fn test_detail_table_rejects_invalid_month() {
        let rows = vec![detail_row("001", "A", "L1", 13, 1)];

        let err = detail_table(&rows, &ReportLabels::default(), None).unwrap_err();
        assert!(matches!(err, ReportError::InvalidExpiryMonth(13)));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Integer(42).display(), "42");
        assert_eq!(CellValue::Empty.display(), "");
        assert_eq!(CellValue::Text("x".to_string()).display(), "x");
    }
}
