use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use estoque_relatorio::{Server, test_utils::TestServerBuilder};
use tower::ServiceExt;

/// Router plus direct store access for seeding
pub struct TestHarness {
    pub server: Server,
    pub app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name).unwrap().to_str().unwrap()
    }
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::from_builder(TestServerBuilder::new()).await
    }

    /// Harness whose store has no tables, so every report query fails
    pub async fn without_schema() -> Self {
        Self::from_builder(TestServerBuilder::new().without_migrations()).await
    }

    async fn from_builder(builder: TestServerBuilder) -> Self {
        let server = builder.build().await;
        let app = server.create_app();
        Self { server, app }
    }

    /// Product A ("001") with batches L1=10 and L2=5, product B ("002") never counted
    pub async fn seed_scenario(&self) {
        let db = self.server.database.connection();
        let a = estoque_relatorio::test_utils::seed_product(db, "001", "A").await;
        estoque_relatorio::test_utils::seed_product(db, "002", "B").await;
        estoque_relatorio::test_utils::seed_count(db, a, "L2", 6, 2025, 5).await;
        estoque_relatorio::test_utils::seed_count(db, a, "L1", 1, 2025, 10).await;
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
