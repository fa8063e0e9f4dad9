use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub fn table() -> TableCreateStatement {
    Table::create()
        .table(Orders::Table)
        .if_not_exists()
        .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Orders::IdUser).uuid().not_null())
        .col(
            // CHECK keeps raw SQL writers inside the closed status set.
            ColumnDef::new(Orders::Status)
                .string_len(100)
                .not_null()
                .check(Expr::col(Orders::Status).is_in(["Placed", "Shipped", "Delivered"])),
        )
        .col(ColumnDef::new(Orders::Price).decimal_len(10, 2).not_null())
        .col(ColumnDef::new(Orders::Date).date().not_null())
        .col(ColumnDef::new(Orders::DeliveryAddress).text().not_null())
        .col(
            ColumnDef::new(Orders::PaymentMethod)
                .string_len(20)
                .not_null()
                .check(Expr::col(Orders::PaymentMethod).is_in(["Card", "Cash on delivery"])),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_orders_id_user")
                .from(Orders::Table, Orders::IdUser)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

pub fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_orders_status")
            .table(Orders::Table)
            .col(Orders::Status)
            .to_owned(),
        // One order per user per day.
        Index::create()
            .name("unique_user_order_date")
            .table(Orders::Table)
            .col(Orders::IdUser)
            .col(Orders::Date)
            .unique()
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
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    IdUser,
    Status,
    Price,
    Date,
    DeliveryAddress,
    PaymentMethod,
}
