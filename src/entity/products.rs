use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::SchemaError;
use crate::validate::{char_len_at_most, decimal_10_2};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[validate(length(max = 50))]
    pub name: String,
    pub id_category: Uuid,
    pub id_manufacturer: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "crate::validate::validate_decimal_10_2")]
    pub price: Decimal,
    #[validate(length(max = 50))]
    pub material: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "crate::validate::validate_decimal_10_2")]
    pub weight: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::IdCategory",
        to = "super::categories::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Categories,
    #[sea_orm(
        belongs_to = "super::manufacturers::Entity",
        from = "Column::IdManufacturer",
        to = "super::manufacturers::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Manufacturers,
    #[sea_orm(has_many = "super::positions::Entity")]
    Positions,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::manufacturers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturers.def()
    }
}

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, _insert: bool) -> Result<Self, DbErr> {
        if let ActiveValue::Set(v) = &self.name {
            char_len_at_most("name", v, 50).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.material {
            char_len_at_most("material", v, 50).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.price {
            decimal_10_2("price", v).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.weight {
            decimal_10_2("weight", v).map_err(SchemaError::into_db_err)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn over_precise_weight_fails_validation() {
        let product = Model {
            id: Uuid::new_v4(),
            name: "Hammer".into(),
            id_category: Uuid::new_v4(),
            id_manufacturer: Uuid::new_v4(),
            description: "A claw hammer".into(),
            price: dec!(19.99),
            material: "Steel".into(),
            weight: dec!(0.755),
        };
        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("weight"));
    }
}
