use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;
use super::m20250301_000004_create_products_table::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub fn table() -> TableCreateStatement {
    Table::create()
        .table(Reviews::Table)
        .if_not_exists()
        .col(ColumnDef::new(Reviews::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Reviews::IdUser).uuid().not_null())
        .col(ColumnDef::new(Reviews::IdProduct).uuid().not_null())
        .col(ColumnDef::new(Reviews::Comment).string_len(200).not_null())
        .col(ColumnDef::new(Reviews::Date).date().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_reviews_id_user")
                .from(Reviews::Table, Reviews::IdUser)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_reviews_id_product")
                .from(Reviews::Table, Reviews::IdProduct)
                .to(Products::Table, Products::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

pub fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_reviews_id_user")
            .table(Reviews::Table)
            .col(Reviews::IdUser)
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
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    IdUser,
    IdProduct,
    Comment,
    Date,
}
