//! Renders the migration DDL to Postgres SQL and checks the structural
//! contract without needing a live database.

use sea_orm::sea_query::{PostgresQueryBuilder, SchemaStatementBuilder};

use shop_schema::migration::{
    m20250301_000001_create_users_table as users_table,
    m20250301_000002_create_categories_table as categories_table,
    m20250301_000003_create_manufacturers_table as manufacturers_table,
    m20250301_000004_create_products_table as products_table,
    m20250301_000005_create_orders_table as orders_table,
    m20250301_000006_create_positions_table as positions_table,
    m20250301_000007_create_reviews_table as reviews_table,
};

fn render(stmt: impl SchemaStatementBuilder) -> String {
    stmt.to_string(PostgresQueryBuilder)
}

#[test]
fn users_table_has_length_limited_columns() {
    let sql = render(users_table::table());
    assert!(sql.contains(r#""first_name" varchar(20)"#), "{sql}");
    assert!(sql.contains(r#""last_name" varchar(25)"#), "{sql}");
    assert!(sql.contains(r#""phone" varchar(20)"#), "{sql}");
}

#[test]
fn orders_table_enforces_enum_sets_and_cascade() {
    let sql = render(orders_table::table());
    assert!(sql.contains("CHECK"), "{sql}");
    for status in ["'Placed'", "'Shipped'", "'Delivered'"] {
        assert!(sql.contains(status), "missing {status} in {sql}");
    }
    for method in ["'Card'", "'Cash on delivery'"] {
        assert!(sql.contains(method), "missing {method} in {sql}");
    }
    assert!(sql.contains(r#""price" decimal(10, 2)"#), "{sql}");
    assert!(sql.contains(r#"REFERENCES "users""#), "{sql}");
    assert!(sql.contains("ON DELETE CASCADE"), "{sql}");
}

#[test]
fn order_uniqueness_is_per_user_per_day() {
    let rendered: Vec<String> = orders_table::indexes().into_iter().map(render).collect();
    let unique = rendered
        .iter()
        .find(|sql| sql.contains("unique_user_order_date"))
        .expect("unique index missing");
    assert!(unique.contains("UNIQUE"), "{unique}");
    assert!(unique.contains(r#""id_user""#), "{unique}");
    assert!(unique.contains(r#""date""#), "{unique}");
    // The status index is a plain lookup index, not a uniqueness rule.
    let status = rendered
        .iter()
        .find(|sql| sql.contains("idx_orders_status"))
        .expect("status index missing");
    assert!(!status.contains("UNIQUE"), "{status}");
}

#[test]
fn products_table_cascades_from_both_parents() {
    let sql = render(products_table::table());
    assert!(sql.contains(r#"REFERENCES "categories""#), "{sql}");
    assert!(sql.contains(r#"REFERENCES "manufacturers""#), "{sql}");
    assert_eq!(sql.matches("ON DELETE CASCADE").count(), 2, "{sql}");
    assert!(sql.contains(r#""weight" decimal(10, 2)"#), "{sql}");
}

#[test]
fn positions_table_cascades_from_order_and_product() {
    let sql = render(positions_table::table());
    assert!(sql.contains(r#"REFERENCES "orders""#), "{sql}");
    assert!(sql.contains(r#"REFERENCES "products""#), "{sql}");
    assert_eq!(sql.matches("ON DELETE CASCADE").count(), 2, "{sql}");
    assert!(sql.contains(r#""quantity" integer"#), "{sql}");
}

#[test]
fn reviews_table_cascades_from_user_and_product() {
    let sql = render(reviews_table::table());
    assert!(sql.contains(r#"REFERENCES "users""#), "{sql}");
    assert!(sql.contains(r#"REFERENCES "products""#), "{sql}");
    assert_eq!(sql.matches("ON DELETE CASCADE").count(), 2, "{sql}");
    assert!(sql.contains(r#""comment" varchar(200)"#), "{sql}");
}

#[test]
fn every_table_carries_its_lookup_index() {
    let cases = [
        (users_table::indexes(), "idx_users_first_name", r#""first_name""#),
        (categories_table::indexes(), "idx_categories_name", r#""name""#),
        (
            manufacturers_table::indexes(),
            "idx_manufacturers_name",
            r#""name""#,
        ),
        (products_table::indexes(), "idx_products_name", r#""name""#),
        (
            positions_table::indexes(),
            "idx_positions_id_product",
            r#""id_product""#,
        ),
        (reviews_table::indexes(), "idx_reviews_id_user", r#""id_user""#),
    ];
    for (indexes, name, column) in cases {
        let found = indexes
            .into_iter()
            .map(render)
            .find(|sql| sql.contains(name))
            .unwrap_or_else(|| panic!("missing index {name}"));
        assert!(found.contains(column), "{found}");
    }
}
