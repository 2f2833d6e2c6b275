use crate::server::Server;
use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estoque Relatório API",
        version = "1.0.0",
        description = "Inventory count reports as JSON, PDF and XLSX"
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::reports::summary_report,
        crate::routes::reports::detail_report,
        crate::routes::reports::pdf_report,
        crate::routes::reports::excel_report,
    ),
    components(
        schemas(
            crate::health::HealthResponse,
            crate::health::HealthStatus,
            crate::health::HealthCheckResult,
            crate::reports::SummaryReport,
            crate::database::SummaryRow,
            crate::database::DetailRow,
            crate::error::ReportErrorBody,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Reports", description = "Inventory count reports"),
    )
)]
pub struct ApiDoc;

/// Create documentation routes
pub fn create_docs_routes() -> Router<Server> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
