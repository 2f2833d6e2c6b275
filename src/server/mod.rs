pub mod config;
pub mod request_log;

use crate::{
    config::Config,
    database::{DatabaseManager, DatabaseManagerImpl},
    error::AppError,
    health::HealthService,
    reports::ReportService,
    routes::{create_docs_routes, create_health_routes, create_report_routes},
    server::request_log::request_response_logger,
};
use axum::{Router, middleware};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Clone)]
pub struct Server {
    pub config: Arc<Config>,
    pub database: Arc<dyn DatabaseManager>,
    pub health_service: Arc<HealthService>,
    pub report_service: Arc<ReportService>,
}

impl Server {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let database_impl = Arc::new(DatabaseManagerImpl::new_from_config(&config).await?);

        let server = Self::with_database(config, database_impl.clone());
        server.health_service.register(database_impl).await;

        Ok(server)
    }

    /// Assemble the services around an existing database manager
    pub fn with_database(config: Config, database: Arc<dyn DatabaseManager>) -> Self {
        let report_service = Arc::new(ReportService::new(database.clone()));

        Self {
            config: Arc::new(config),
            database,
            health_service: Arc::new(HealthService::new()),
            report_service,
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        if self.config.database.migration_on_startup {
            info!("Running database migrations");
            self.database.migrate().await?;
            info!("Database migrations completed successfully");
        }

        let app = self.create_app();

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to bind to address: {}", e)))?;

        info!("Server listening on http://{}", addr);

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }

    // Creates an application router
    pub fn create_app(&self) -> Router {
        let mut app = Router::new()
            .nest("/relatorio", create_report_routes())
            .nest("/health", create_health_routes())
            .nest("/api", create_docs_routes())
            .with_state(self.clone());

        if self.config.logging.log_request {
            app = app.layer(middleware::from_fn(request_response_logger));
        }
        app
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Graceful shutdown initiated");
}
