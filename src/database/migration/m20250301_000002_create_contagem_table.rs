use super::{CountRecords, Products};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CountRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CountRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CountRecords::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CountRecords::Batch).string_len(50).not_null())
                    .col(
                        ColumnDef::new(CountRecords::ExpiryMonth)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CountRecords::ExpiryYear)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CountRecords::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contagem_produto_id")
                            .from(CountRecords::Table, CountRecords::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Detail report orders by product then batch
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contagem_produto_id_lote")
                    .table(CountRecords::Table)
                    .col(CountRecords::ProductId)
                    .col(CountRecords::Batch)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CountRecords::Table).to_owned())
            .await
    }
}
