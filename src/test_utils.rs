use crate::{
    config::Config,
    database::entities::{count_records, products},
    server::Server,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Test server builder backed by an in-memory SQLite database
pub struct TestServerBuilder {
    config: Config,
    run_migrations: bool,
}

impl TestServerBuilder {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.logging.log_request = false;

        Self {
            config,
            run_migrations: true,
        }
    }

    /// Set a custom configuration; the database URL is still replaced
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Leave the schema empty so every query fails
    pub fn without_migrations(mut self) -> Self {
        self.run_migrations = false;
        self
    }

    pub async fn build(self) -> Server {
        let mut config = self.config;
        config.database.url = "sqlite::memory:".to_string();
        // Every pooled connection to sqlite::memory: would open its own database
        config.database.max_connections = 1;

        let server = Server::new(config).await.unwrap();
        if self.run_migrations {
            server.database.migrate().await.unwrap();
        }
        server
    }
}

impl Default for TestServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a product and return its id
pub async fn seed_product(db: &DatabaseConnection, code: &str, name: &str) -> i32 {
    let product = products::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        ..Default::default()
    };
    product.insert(db).await.unwrap().id
}

pub async fn seed_count(
    db: &DatabaseConnection,
    product_id: i32,
    batch: &str,
    expiry_month: i32,
    expiry_year: i32,
    quantity: i32,
) {
    let record = count_records::ActiveModel {
        product_id: Set(product_id),
        batch: Set(batch.to_string()),
        expiry_month: Set(expiry_month),
        expiry_year: Set(expiry_year),
        quantity: Set(quantity),
        ..Default::default()
    };
    record.insert(db).await.unwrap();
}
