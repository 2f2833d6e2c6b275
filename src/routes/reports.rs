use crate::{
    database::DetailRow,
    error::{ReportErrorBody, ReportFailure},
    reports::{RenderedReport, SummaryReport},
    server::Server,
};
use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Json, Response},
    routing::get,
};

/// Create report routes
pub fn create_report_routes() -> Router<Server> {
    Router::new()
        .route("/resumo", get(summary_report))
        .route("/detalhado", get(detail_report))
        .route("/pdf", get(pdf_report))
        .route("/excel", get(excel_report))
}

/// Per-product totals with the grand total
#[utoipa::path(
    get,
    path = "/relatorio/resumo",
    summary = "Summary Report",
    description = "Total counted quantity per product plus the grand total",
    tags = ["Reports"],
    responses(
        (status = 200, description = "Summary report", body = SummaryReport),
        (status = 500, description = "Database failure", body = ReportErrorBody)
    )
)]
pub async fn summary_report(
    State(server): State<Server>,
) -> Result<Json<SummaryReport>, ReportFailure> {
    let report = server
        .report_service
        .summary()
        .await
        .map_err(|e| ReportFailure::new(ReportFailure::SUMMARY, e))?;

    Ok(Json(report))
}

/// Every count record joined with its product
#[utoipa::path(
    get,
    path = "/relatorio/detalhado",
    summary = "Detail Report",
    description = "One row per count record, ordered by product code then batch",
    tags = ["Reports"],
    responses(
        (status = 200, description = "Detail report", body = Vec<DetailRow>),
        (status = 500, description = "Database failure", body = ReportErrorBody)
    )
)]
pub async fn detail_report(
    State(server): State<Server>,
) -> Result<Json<Vec<DetailRow>>, ReportFailure> {
    let rows = server
        .report_service
        .detail()
        .await
        .map_err(|e| ReportFailure::new(ReportFailure::DETAIL, e))?;

    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/relatorio/pdf",
    summary = "PDF Report",
    description = "Summary and detail tables as an A4 PDF attachment",
    tags = ["Reports"],
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf", body = Vec<u8>),
        (status = 500, description = "Database or rendering failure", body = ReportErrorBody)
    )
)]
pub async fn pdf_report(State(server): State<Server>) -> Result<Response, ReportFailure> {
    let report = server
        .report_service
        .pdf()
        .await
        .map_err(|e| ReportFailure::new(ReportFailure::PDF, e))?;

    Ok(attachment(report))
}

#[utoipa::path(
    get,
    path = "/relatorio/excel",
    summary = "Excel Report",
    description = "Two-sheet XLSX workbook attachment: summary and detail",
    tags = ["Reports"],
    responses(
        (status = 200, description = "XLSX workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", body = Vec<u8>),
        (status = 500, description = "Database or rendering failure", body = ReportErrorBody)
    )
)]
pub async fn excel_report(State(server): State<Server>) -> Result<Response, ReportFailure> {
    let report = server
        .report_service
        .xlsx()
        .await
        .map_err(|e| ReportFailure::new(ReportFailure::EXCEL, e))?;

    Ok(attachment(report))
}

fn attachment(report: RenderedReport) -> Response {
    (
        [
            (header::CONTENT_TYPE, report.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", report.filename),
            ),
        ],
        report.bytes,
    )
        .into_response()
}
