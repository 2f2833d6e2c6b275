use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "produto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "codigo", unique)]
    pub code: String,
    #[sea_orm(column_name = "nome")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::count_records::Entity")]
    CountRecords,
}

impl Related<super::count_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CountRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
