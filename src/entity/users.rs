use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, QueryOrder, Select};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::SchemaError;
use crate::validate::{char_len_at_most, email_format};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[validate(length(max = 20))]
    pub first_name: String,
    #[validate(length(max = 25))]
    pub last_name: String,
    #[validate(length(max = 254), email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Entity {
    /// Natural listing order: (first_name, last_name).
    pub fn find_ordered() -> Select<Entity> {
        Self::find()
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::LastName)
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, _insert: bool) -> Result<Self, DbErr> {
        if let ActiveValue::Set(v) = &self.first_name {
            char_len_at_most("first_name", v, 20).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.last_name {
            char_len_at_most("last_name", v, 25).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.email {
            // A structurally valid address can still overflow varchar(254).
            char_len_at_most("email", v, 254).map_err(SchemaError::into_db_err)?;
            email_format("email", v).map_err(SchemaError::into_db_err)?;
        }
        if let ActiveValue::Set(v) = &self.phone {
            char_len_at_most("phone", v, 20).map_err(SchemaError::into_db_err)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> Model {
        Model {
            id: Uuid::new_v4(),
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "alice@example.com".into(),
            phone: "+1 555 0100".into(),
        }
    }

    #[test]
    fn valid_user_passes_validation() {
        assert!(valid_user().validate().is_ok());
    }

    #[test]
    fn invalid_email_fails_validation() {
        let mut user = valid_user();
        user.email = "not-an-email".into();
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn overlong_first_name_fails_validation() {
        let mut user = valid_user();
        user.first_name = "a".repeat(21);
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn overlong_but_well_formed_email_fails_validation() {
        let mut user = valid_user();
        let local = "a".repeat(64);
        let label = "b".repeat(63);
        user.email = format!("{local}@{label}.{label}.{label}.com");
        assert!(
            validator::validate_email(&user.email),
            "address must be structurally valid for this case to mean anything"
        );
        assert!(user.email.chars().count() > 254);
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn find_ordered_sorts_by_first_then_last_name() {
        use sea_orm::{DbBackend, QueryTrait};

        let sql = Entity::find_ordered().build(DbBackend::Postgres).to_string();
        assert!(
            sql.contains(r#"ORDER BY "users"."first_name" ASC, "users"."last_name" ASC"#),
            "{sql}"
        );
    }
}
