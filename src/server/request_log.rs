use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// Request/response logging middleware for the report and health endpoints
pub async fn request_response_logger(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    // Skip the OpenAPI document
    let is_logged_route = path.starts_with("/relatorio") || path.starts_with("/health");
    if !is_logged_route {
        return next.run(req).await;
    }

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!(method = %method, path = %path, ip = %ip, "API request");

    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        latency_ms = %duration.as_millis(),
        "API response"
    );

    response
}
