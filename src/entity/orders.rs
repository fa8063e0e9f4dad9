use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::SchemaError;
use crate::validate::decimal_10_2;

/// Fulfilment state of an order. A label, not a driven state machine.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(100))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "Placed")]
    Placed,
    #[sea_orm(string_value = "Shipped")]
    Shipped,
    #[sea_orm(string_value = "Delivered")]
    Delivered,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "Card")]
    Card,
    #[sea_orm(string_value = "Cash on delivery")]
    CashOnDelivery,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub id_user: Uuid,
    pub status: OrderStatus,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[validate(custom = "crate::validate::validate_decimal_10_2")]
    pub price: Decimal,
    pub date: Date,
    #[sea_orm(column_type = "Text")]
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::IdUser",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(has_many = "super::positions::Entity")]
    Positions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, _insert: bool) -> Result<Self, DbErr> {
        if let ActiveValue::Set(v) = &self.price {
            decimal_10_2("price", v).map_err(SchemaError::into_db_err)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn status_round_trips_through_string_values() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            let value = status.to_value();
            assert_eq!(OrderStatus::try_from_value(&value).unwrap(), status);
        }
    }

    #[test]
    fn payment_method_uses_display_strings() {
        assert_eq!(
            PaymentMethod::CashOnDelivery.to_value(),
            "Cash on delivery".to_owned()
        );
        assert_eq!(PaymentMethod::Card.to_value(), "Card".to_owned());
    }

    #[test]
    fn unknown_status_string_is_rejected() {
        assert!(OrderStatus::try_from_value(&"Cancelled".to_owned()).is_err());
    }
}
