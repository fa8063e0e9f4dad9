use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_categories_table::Categories;
use super::m20250301_000003_create_manufacturers_table::Manufacturers;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub fn table() -> TableCreateStatement {
    Table::create()
        .table(Products::Table)
        .if_not_exists()
        .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Products::Name).string_len(50).not_null())
        .col(ColumnDef::new(Products::IdCategory).uuid().not_null())
        .col(ColumnDef::new(Products::IdManufacturer).uuid().not_null())
        .col(ColumnDef::new(Products::Description).text().not_null())
        .col(
            ColumnDef::new(Products::Price)
                .decimal_len(10, 2)
                .not_null(),
        )
        .col(ColumnDef::new(Products::Material).string_len(50).not_null())
        .col(
            ColumnDef::new(Products::Weight)
                .decimal_len(10, 2)
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_products_id_category")
                .from(Products::Table, Products::IdCategory)
                .to(Categories::Table, Categories::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_products_id_manufacturer")
                .from(Products::Table, Products::IdManufacturer)
                .to(Manufacturers::Table, Manufacturers::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

pub fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_products_name")
            .table(Products::Table)
            .col(Products::Name)
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
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
    IdCategory,
    IdManufacturer,
    Description,
    Price,
    Material,
    Weight,
}
