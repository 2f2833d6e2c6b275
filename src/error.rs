use crate::database::DatabaseError;
use crate::reports::ReportError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug)]
pub enum AppError {
    Database(DatabaseError),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(err) => write!(f, "{}", err),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Error body returned by every report endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportErrorBody {
    /// Context prefix followed by the underlying failure
    #[schema(example = "Erro ao gerar PDF: Database error: no such table: produto")]
    pub erro: String,
}

/// A failed report request, tagged with which report was being produced
#[derive(Debug)]
pub struct ReportFailure {
    pub context: &'static str,
    pub source: ReportError,
}

impl ReportFailure {
    pub const SUMMARY: &'static str = "Erro ao gerar resumo";
    pub const DETAIL: &'static str = "Erro ao gerar relatório detalhado";
    pub const PDF: &'static str = "Erro ao gerar PDF";
    pub const EXCEL: &'static str = "Erro ao gerar Excel";

    pub fn new(context: &'static str, source: ReportError) -> Self {
        Self { context, source }
    }

    pub fn message(&self) -> String {
        format!("{}: {}", self.context, self.source)
    }
}

impl IntoResponse for ReportFailure {
    fn into_response(self) -> Response {
        let erro = self.message();
        tracing::error!(error = %self.source, "{}", self.context);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ReportErrorBody { erro }),
        )
            .into_response()
    }
}
