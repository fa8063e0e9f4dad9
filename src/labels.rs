//! Human-readable names for entities and fields, for admin forms and list
//! views. Pure presentation metadata: nothing structural depends on it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldLabel {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntityLabels {
    pub table: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    pub fields: &'static [FieldLabel],
}

pub const LABELS: &[EntityLabels] = &[
    EntityLabels {
        table: "users",
        singular: "User",
        plural: "Users",
        fields: &[
            FieldLabel { field: "first_name", label: "First name" },
            FieldLabel { field: "last_name", label: "Last name" },
            FieldLabel { field: "email", label: "Email" },
            FieldLabel { field: "phone", label: "Phone number" },
        ],
    },
    EntityLabels {
        table: "orders",
        singular: "Order",
        plural: "Orders",
        fields: &[
            FieldLabel { field: "id_user", label: "User" },
            FieldLabel { field: "status", label: "Order status" },
            FieldLabel { field: "price", label: "Price" },
            FieldLabel { field: "date", label: "Order date" },
            FieldLabel { field: "delivery_address", label: "Delivery address" },
            FieldLabel { field: "payment_method", label: "Payment method" },
        ],
    },
    EntityLabels {
        table: "categories",
        singular: "Category",
        plural: "Categories",
        fields: &[FieldLabel { field: "name", label: "Category name" }],
    },
    EntityLabels {
        table: "manufacturers",
        singular: "Manufacturer",
        plural: "Manufacturers",
        fields: &[
            FieldLabel { field: "name", label: "Manufacturer name" },
            FieldLabel { field: "country", label: "Country" },
        ],
    },
    EntityLabels {
        table: "products",
        singular: "Product",
        plural: "Products",
        fields: &[
            FieldLabel { field: "name", label: "Product name" },
            FieldLabel { field: "id_category", label: "Category" },
            FieldLabel { field: "id_manufacturer", label: "Manufacturer" },
            FieldLabel { field: "description", label: "Description" },
            FieldLabel { field: "price", label: "Price" },
            FieldLabel { field: "material", label: "Material" },
            FieldLabel { field: "weight", label: "Weight" },
        ],
    },
    EntityLabels {
        table: "positions",
        singular: "Position",
        plural: "Positions",
        fields: &[
            FieldLabel { field: "id_order", label: "Order" },
            FieldLabel { field: "id_product", label: "Product" },
            FieldLabel { field: "quantity", label: "Quantity" },
            FieldLabel { field: "unit_price", label: "Unit price" },
        ],
    },
    EntityLabels {
        table: "reviews",
        singular: "Review",
        plural: "Reviews",
        fields: &[
            FieldLabel { field: "id_user", label: "User" },
            FieldLabel { field: "id_product", label: "Product" },
            FieldLabel { field: "comment", label: "Comment" },
            FieldLabel { field: "date", label: "Review date" },
        ],
    },
];

pub fn for_table(table: &str) -> Option<&'static EntityLabels> {
    LABELS.iter().find(|entity| entity.table == table)
}

pub fn field_label(table: &str, field: &str) -> Option<&'static str> {
    for_table(table)?
        .fields
        .iter()
        .find(|f| f.field == field)
        .map(|f| f.label)
}

/// The whole label table as JSON, for form generators on the web side.
pub fn as_json() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(LABELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_has_labels() {
        for table in [
            "users",
            "orders",
            "categories",
            "manufacturers",
            "products",
            "positions",
            "reviews",
        ] {
            assert!(for_table(table).is_some(), "missing labels for {table}");
        }
    }

    #[test]
    fn field_lookup_finds_known_fields() {
        assert_eq!(field_label("orders", "status"), Some("Order status"));
        assert_eq!(field_label("orders", "no_such_field"), None);
        assert_eq!(field_label("no_such_table", "status"), None);
    }

    #[test]
    fn json_export_covers_all_entities() {
        let value = as_json().unwrap();
        assert_eq!(value.as_array().unwrap().len(), LABELS.len());
    }
}
