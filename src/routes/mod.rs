pub mod docs;
pub mod health;
pub mod reports;

pub use docs::create_docs_routes;
pub use health::create_health_routes;
pub use reports::create_report_routes;
