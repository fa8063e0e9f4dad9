use sea_orm_migration::prelude::*;

use super::m20250301_000004_create_products_table::Products;
use super::m20250301_000005_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub fn table() -> TableCreateStatement {
    Table::create()
        .table(Positions::Table)
        .if_not_exists()
        .col(ColumnDef::new(Positions::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Positions::IdOrder).uuid().not_null())
        .col(ColumnDef::new(Positions::IdProduct).uuid().not_null())
        .col(ColumnDef::new(Positions::Quantity).integer().not_null())
        .col(
            ColumnDef::new(Positions::UnitPrice)
                .decimal_len(10, 2)
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_positions_id_order")
                .from(Positions::Table, Positions::IdOrder)
                .to(Orders::Table, Orders::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_positions_id_product")
                .from(Positions::Table, Positions::IdProduct)
                .to(Products::Table, Products::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

pub fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_positions_id_product")
            .table(Positions::Table)
            .col(Positions::IdProduct)
            .to_owned(),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await?;
        for index in indexes() {
            manager.create_index(index).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Positions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Positions {
    Table,
    Id,
    IdOrder,
    IdProduct,
    Quantity,
    UnitPrice,
}
