use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One counted quantity of a product for a given batch and expiry month.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contagem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "produto_id")]
    pub product_id: i32,
    #[sea_orm(column_name = "lote")]
    pub batch: String,
    #[sea_orm(column_name = "validade_mes")]
    pub expiry_month: i32,
    #[sea_orm(column_name = "validade_ano")]
    pub expiry_year: i32,
    #[sea_orm(column_name = "quantidade")]
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Product,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
