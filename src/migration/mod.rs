//! Programmatic migrations creating the shop tables in referential order:
//! parents (users, categories, manufacturers) before products and orders,
//! which in turn precede positions and reviews.

use sea_orm_migration::prelude::*;

pub mod m20250301_000001_create_users_table;
pub mod m20250301_000002_create_categories_table;
pub mod m20250301_000003_create_manufacturers_table;
pub mod m20250301_000004_create_products_table;
pub mod m20250301_000005_create_orders_table;
pub mod m20250301_000006_create_positions_table;
pub mod m20250301_000007_create_reviews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_categories_table::Migration),
            Box::new(m20250301_000003_create_manufacturers_table::Migration),
            Box::new(m20250301_000004_create_products_table::Migration),
            Box::new(m20250301_000005_create_orders_table::Migration),
            Box::new(m20250301_000006_create_positions_table::Migration),
            Box::new(m20250301_000007_create_reviews_table::Migration),
        ]
    }
}
