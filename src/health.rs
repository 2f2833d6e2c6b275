use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub message: Option<String>,
    pub details: Option<serde_json::Value>,
    pub duration_ms: Option<u64>,
}

impl HealthCheckResult {
    pub fn healthy_with_details(details: serde_json::Value) -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: None,
            details: Some(details),
            duration_ms: None,
        }
    }

    pub fn unhealthy_with_details(message: String, details: serde_json::Value) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message),
            details: Some(details),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[async_trait]
pub trait HealthChecker: Send + Sync {
    /// The name of this health check component
    fn name(&self) -> &str;

    /// Perform the health check
    async fn check(&self) -> HealthCheckResult;
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub checks: HashMap<String, HealthCheckResult>,
}

#[derive(Default)]
pub struct HealthService {
    checkers: RwLock<HashMap<String, Arc<dyn HealthChecker>>>,
}

impl HealthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, checker: Arc<dyn HealthChecker>) {
        let name = checker.name().to_string();
        self.checkers.write().await.insert(name, checker);
    }

    /// Run the checks selected by `filter`: `all`, a component name, or none
    pub async fn check_health(&self, filter: Option<&str>) -> HealthResponse {
        let checkers = self.checkers.read().await;

        let selected: Vec<_> = match filter {
            Some("all") => checkers.iter().collect(),
            Some(specific) => checkers
                .iter()
                .filter(|(name, _)| name.as_str() == specific)
                .collect(),
            None => Vec::new(),
        };

        let mut checks = HashMap::new();
        for (name, checker) in selected {
            let start = Instant::now();
            let result = checker
                .check()
                .await
                .with_duration(start.elapsed().as_millis() as u64);
            checks.insert(name.clone(), result);
        }

        let status = if checks
            .values()
            .any(|r| r.status == HealthStatus::Unhealthy)
        {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        HealthResponse {
            status,
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct MockHealthyChecker;

    #[async_trait]
    impl HealthChecker for MockHealthyChecker {
        fn name(&self) -> &str {
            "mock_healthy"
        }

        async fn check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy_with_details(json!({"test": "passed"}))
        }
    }

    struct MockUnhealthyChecker;

    #[async_trait]
    impl HealthChecker for MockUnhealthyChecker {
        fn name(&self) -> &str {
            "mock_unhealthy"
        }

        async fn check(&self) -> HealthCheckResult {
            HealthCheckResult::unhealthy_with_details("Critical failure".to_string(), json!({}))
        }
    }

    #[tokio::test]
    async fn test_no_checks_requested() {
        let service = HealthService::new();
        service.register(Arc::new(MockUnhealthyChecker)).await;

        let response = service.check_health(None).await;
        assert_eq!(response.status, HealthStatus::Healthy);
        assert!(response.checks.is_empty());
        assert_eq!(response.service, "estoque-relatorio");
    }

    #[tokio::test]
    async fn test_all_checks_worst_status_wins() {
        let service = HealthService::new();
        service.register(Arc::new(MockHealthyChecker)).await;
        service.register(Arc::new(MockUnhealthyChecker)).await;

        let response = service.check_health(Some("all")).await;
        assert_eq!(response.status, HealthStatus::Unhealthy);
        assert_eq!(response.checks.len(), 2);
        assert!(response.checks["mock_healthy"].duration_ms.is_some());
    }

    #[tokio::test]
    async fn test_specific_check() {
        let service = HealthService::new();
        service.register(Arc::new(MockHealthyChecker)).await;
        service.register(Arc::new(MockUnhealthyChecker)).await;

        let response = service.check_health(Some("mock_healthy")).await;
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.checks.len(), 1);
        assert!(response.checks.contains_key("mock_healthy"));
    }
}
