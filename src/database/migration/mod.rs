use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20250301_000001_create_produto_table;
mod m20250301_000002_create_contagem_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_produto_table::Migration),
            Box::new(m20250301_000002_create_contagem_table::Migration),
        ]
    }
}

/// Common table and column identifiers
#[derive(Iden)]
pub enum Products {
    #[iden = "produto"]
    Table,
    Id,
    #[iden = "codigo"]
    Code,
    #[iden = "nome"]
    Name,
}

#[derive(Iden)]
pub enum CountRecords {
    #[iden = "contagem"]
    Table,
    Id,
    #[iden = "produto_id"]
    ProductId,
    #[iden = "lote"]
    Batch,
    #[iden = "validade_mes"]
    ExpiryMonth,
    #[iden = "validade_ano"]
    ExpiryYear,
    #[iden = "quantidade"]
    Quantity,
}
