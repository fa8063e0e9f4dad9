use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::SchemaError;
use crate::validate::char_len_at_most;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "manufacturers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[validate(length(max = 50))]
    pub name: String,
    #[validate(length(max = 50))]
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, _insert: bool) -> Result<Self, DbErr> {
        if let ActiveValue::Set(v) = &self.name {
            char_len_at_most("name", v, 50).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.country {
            char_len_at_most("country", v, 50).map_err(SchemaError::into_db_err)?;
        }
        Ok(self)
    }
}
