use crate::database::entities::{count_records, products};
use crate::database::{DatabaseError, DatabaseResult};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Total counted quantity of one product across all of its count records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryRow {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "total_quantidade")]
    pub total_quantity: i64,
}

/// A single count record joined with the identity of its product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct DetailRow {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "lote")]
    pub batch: String,
    #[serde(rename = "validade_mes")]
    pub expiry_month: i32,
    #[serde(rename = "validade_ano")]
    pub expiry_year: i32,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
}

#[derive(FromQueryResult)]
struct SummaryQueryRow {
    code: String,
    name: String,
    total_quantity: Option<i64>,
}

impl From<SummaryQueryRow> for SummaryRow {
    fn from(row: SummaryQueryRow) -> Self {
        Self {
            code: row.code,
            name: row.name,
            total_quantity: row.total_quantity.unwrap_or(0),
        }
    }
}

/// Read-only aggregation queries over products and their count records
pub struct InventoryCountsDao {
    db: DatabaseConnection,
}

impl InventoryCountsDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Per-product quantity totals ordered by product code.
    ///
    /// Inner join: products without any count record are not returned.
    pub async fn fetch_summary(&self) -> DatabaseResult<Vec<SummaryRow>> {
        let rows: Vec<SummaryQueryRow> = products::Entity::find()
            .select_only()
            .column_as(products::Column::Code, "code")
            .column_as(products::Column::Name, "name")
            .column_as(count_records::Column::Quantity.sum(), "total_quantity")
            .join(JoinType::InnerJoin, products::Relation::CountRecords.def())
            .group_by(products::Column::Id)
            .group_by(products::Column::Code)
            .group_by(products::Column::Name)
            .order_by_asc(products::Column::Code)
            .into_model()
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(SummaryRow::from).collect())
    }

    /// Every count record with its product, ordered by product code then batch
    pub async fn fetch_detail(&self) -> DatabaseResult<Vec<DetailRow>> {
        count_records::Entity::find()
            .select_only()
            .column_as(products::Column::Code, "code")
            .column_as(products::Column::Name, "name")
            .column_as(count_records::Column::Batch, "batch")
            .column_as(count_records::Column::ExpiryMonth, "expiry_month")
            .column_as(count_records::Column::ExpiryYear, "expiry_year")
            .column_as(count_records::Column::Quantity, "quantity")
            .join(JoinType::InnerJoin, count_records::Relation::Product.def())
            .order_by_asc(products::Column::Code)
            .order_by_asc(count_records::Column::Batch)
            .into_model::<DetailRow>()
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::{DatabaseManager, DatabaseManagerImpl};
    use crate::test_utils::{seed_count, seed_product};
    use sea_orm::Database;

    async fn migrated_database() -> DatabaseManagerImpl {
        let mut config = Config::default();
        config.database.url = "sqlite::memory:".to_string();
        config.database.max_connections = 1;

        let database = DatabaseManagerImpl::new_from_config(&config).await.unwrap();
        database.migrate().await.unwrap();
        database
    }

    #[tokio::test]
    async fn test_summary_sums_quantities_per_product() {
        let database = migrated_database().await;
        let db = database.connection();

        let a = seed_product(db, "001", "A").await;
        let _b = seed_product(db, "002", "B").await;
        let c = seed_product(db, "003", "C").await;
        seed_count(db, a, "L1", 1, 2025, 10).await;
        seed_count(db, a, "L2", 6, 2025, 5).await;
        seed_count(db, c, "X9", 12, 2026, 7).await;

        let summary = database.inventory_counts().fetch_summary().await.unwrap();

        assert_eq!(
            summary,
            vec![
                SummaryRow {
                    code: "001".to_string(),
                    name: "A".to_string(),
                    total_quantity: 15,
                },
                SummaryRow {
                    code: "003".to_string(),
                    name: "C".to_string(),
                    total_quantity: 7,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_summary_orders_by_code() {
        let database = migrated_database().await;
        let db = database.connection();

        let z = seed_product(db, "900", "Zeta").await;
        let a = seed_product(db, "100", "Alfa").await;
        seed_count(db, z, "L1", 3, 2025, 1).await;
        seed_count(db, a, "L1", 3, 2025, 2).await;

        let summary = database.inventory_counts().fetch_summary().await.unwrap();
        let codes: Vec<&str> = summary.iter().map(|row| row.code.as_str()).collect();

        assert_eq!(codes, vec!["100", "900"]);
    }

    #[tokio::test]
    async fn test_summary_zero_quantities_are_kept() {
        let database = migrated_database().await;
        let db = database.connection();

        let a = seed_product(db, "001", "A").await;
        seed_count(db, a, "L1", 1, 2025, 0).await;

        let summary = database.inventory_counts().fetch_summary().await.unwrap();

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_quantity, 0);
    }

    #[tokio::test]
    async fn test_detail_orders_by_code_then_batch() {
        let database = migrated_database().await;
        let db = database.connection();

        let b = seed_product(db, "002", "B").await;
        let a = seed_product(db, "001", "A").await;
        seed_count(db, b, "L1", 4, 2025, 3).await;
        seed_count(db, a, "L2", 2, 2025, 5).await;
        seed_count(db, a, "L1", 1, 2024, 10).await;

        let detail = database.inventory_counts().fetch_detail().await.unwrap();

        let keys: Vec<(&str, &str)> = detail
            .iter()
            .map(|row| (row.code.as_str(), row.batch.as_str()))
            .collect();
        assert_eq!(keys, vec![("001", "L1"), ("001", "L2"), ("002", "L1")]);

        assert_eq!(
            detail[0],
            DetailRow {
                code: "001".to_string(),
                name: "A".to_string(),
                batch: "L1".to_string(),
                expiry_month: 1,
                expiry_year: 2024,
                quantity: 10,
            }
        );
    }

    #[tokio::test]
    async fn test_empty_store_yields_no_rows() {
        let database = migrated_database().await;

        let dao = database.inventory_counts();
        assert!(dao.fetch_summary().await.unwrap().is_empty());
        assert!(dao.fetch_detail().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_tables_surface_database_error() {
        let connection = Database::connect("sqlite::memory:").await.unwrap();
        let dao = InventoryCountsDao::new(connection);

        let err = dao.fetch_summary().await.unwrap_err();
        assert!(matches!(err, DatabaseError::Database(_)));
        assert!(err.to_string().contains("Database error"));
    }
}
