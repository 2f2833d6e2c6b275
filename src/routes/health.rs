use crate::{health::HealthResponse, server::Server};
use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct HealthCheckQuery {
    /// `all` runs every registered check, a component name runs only that one
    #[serde(default)]
    check: Option<String>,
}

/// Create health check routes
pub fn create_health_routes() -> Router<Server> {
    Router::new().route("/", get(health_check))
}

#[utoipa::path(
    get,
    path = "/health",
    summary = "Health Check",
    description = "Service status, optionally with component checks",
    tags = ["Health"],
    params(HealthCheckQuery),
    responses(
        (status = 200, description = "Health report", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<Server>,
    Query(params): Query<HealthCheckQuery>,
) -> Json<HealthResponse> {
    let filter = params.check.as_deref();
    Json(server.health_service.check_health(filter).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthStatus;
    use crate::test_utils::TestServerBuilder;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn health_json(uri: &str) -> serde_json::Value {
        let server = TestServerBuilder::new().build().await;
        let app = create_health_routes().with_state(server);

        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_handler_answers_with_report() {
        let server = TestServerBuilder::new().build().await;
        let query = HealthCheckQuery {
            check: Some("database".to_string()),
        };

        let Json(report) = health_check(State(server), Query(query)).await;

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.checks["database"].status, HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn test_health_check_basic() {
        let json = health_json("/").await;

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_health_check_with_all_query() {
        let json = health_json("/?check=all").await;

        assert_eq!(json["checks"]["database"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_health_check_with_unknown_query() {
        let json = health_json("/?check=unknown").await;

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"], serde_json::json!({}));
    }
}
