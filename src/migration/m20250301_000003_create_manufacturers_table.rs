use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub fn table() -> TableCreateStatement {
    Table::create()
        .table(Manufacturers::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Manufacturers::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Manufacturers::Name).string_len(50).not_null())
        .col(
            ColumnDef::new(Manufacturers::Country)
                .string_len(50)
                .not_null(),
        )
        .to_owned()
}

pub fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_manufacturers_name")
            .table(Manufacturers::Table)
            .col(Manufacturers::Name)
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
            .drop_table(Table::drop().table(Manufacturers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Manufacturers {
    Table,
    Id,
    Name,
    Country,
}
