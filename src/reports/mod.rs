//! Inventory count reports
//!
//! [`ReportService`] fetches fresh rows through the inventory counts DAO on
//! every call and hands them to one of the presenters: summary JSON, detail
//! JSON, PDF or XLSX.

pub mod format;
pub mod layout;
pub mod pdf;
pub mod style;
pub mod xlsx;

use crate::database::{DatabaseError, DatabaseManager, DetailRow, SummaryRow};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use style::ReportStyle;
use thiserror::Error;
use tracing::info;
use utoipa::ToSchema;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("invalid expiry month {0}, expected 1-12")]
    InvalidExpiryMonth(i32),
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
    #[error("spreadsheet rendering failed: {0}")]
    Spreadsheet(String),
}

/// Summary report body: per-product totals plus their sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryReport {
    #[serde(rename = "produtos")]
    pub products: Vec<SummaryRow>,
    #[serde(rename = "total_geral")]
    pub grand_total: i64,
}

impl From<Vec<SummaryRow>> for SummaryReport {
    fn from(products: Vec<SummaryRow>) -> Self {
        let grand_total = layout::grand_total(&products);
        Self {
            products,
            grand_total,
        }
    }
}

/// Both result sets plus the generation time stamped on the documents
#[derive(Debug, Clone)]
pub struct ReportData {
    pub summary: Vec<SummaryRow>,
    pub detail: Vec<DetailRow>,
    pub generated_at: NaiveDateTime,
}

/// A rendered document ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

pub struct ReportService {
    database: Arc<dyn DatabaseManager>,
    style: ReportStyle,
}

impl ReportService {
    pub fn new(database: Arc<dyn DatabaseManager>) -> Self {
        Self {
            database,
            style: ReportStyle::default(),
        }
    }

    pub async fn summary(&self) -> Result<SummaryReport, ReportError> {
        let rows = self.database.inventory_counts().fetch_summary().await?;
        Ok(SummaryReport::from(rows))
    }

    pub async fn detail(&self) -> Result<Vec<DetailRow>, ReportError> {
        Ok(self.database.inventory_counts().fetch_detail().await?)
    }

    async fn fetch(&self) -> Result<ReportData, ReportError> {
        let dao = self.database.inventory_counts();
        let summary = dao.fetch_summary().await?;
        let detail = dao.fetch_detail().await?;

        Ok(ReportData {
            summary,
            detail,
            generated_at: Local::now().naive_local(),
        })
    }

    pub async fn pdf(&self) -> Result<RenderedReport, ReportError> {
        let data = self.fetch().await?;
        let bytes = pdf::render_pdf(&data, &self.style)?;
        info!(
            products = data.summary.len(),
            records = data.detail.len(),
            bytes = bytes.len(),
            "Generated PDF report"
        );

        Ok(RenderedReport {
            bytes,
            filename: self.filename(&data, "pdf"),
            content_type: PDF_CONTENT_TYPE,
        })
    }

    pub async fn xlsx(&self) -> Result<RenderedReport, ReportError> {
        let data = self.fetch().await?;
        let bytes = xlsx::render_xlsx(&data, &self.style)?;
        info!(
            products = data.summary.len(),
            records = data.detail.len(),
            bytes = bytes.len(),
            "Generated XLSX report"
        );

        Ok(RenderedReport {
            bytes,
            filename: self.filename(&data, "xlsx"),
            content_type: XLSX_CONTENT_TYPE,
        })
    }

    fn filename(&self, data: &ReportData, extension: &str) -> String {
        format::report_filename(
            self.style.labels.filename_prefix,
            &data.generated_at,
            extension,
        )
    }
}
