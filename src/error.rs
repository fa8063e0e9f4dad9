use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced to the application layer. Writes that violate the schema
/// fail atomically with one of these; nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Enumeration mismatch, uniqueness conflict, length or precision
    /// overflow, or a missing required field.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A foreign key referencing a row that does not exist.
    #[error("referential violation: {0}")]
    ReferentialViolation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Db(DbErr),
}

impl SchemaError {
    /// Wrap a violation so it can be raised from an `ActiveModelBehavior`
    /// hook, which must return `DbErr`. `From<DbErr>` maps it back.
    pub fn into_db_err(self) -> DbErr {
        DbErr::Custom(self.to_string())
    }
}

impl From<DbErr> for SchemaError {
    fn from(err: DbErr) -> Self {
        if let Some(sql_err) = err.sql_err() {
            return match sql_err {
                SqlErr::UniqueConstraintViolation(msg) => Self::ConstraintViolation(msg),
                SqlErr::ForeignKeyConstraintViolation(msg) => Self::ReferentialViolation(msg),
                _ => Self::Db(err),
            };
        }
        match err {
            DbErr::RecordNotFound(what) => Self::NotFound(what),
            DbErr::Custom(msg) => Self::ConstraintViolation(msg),
            other => Self::Db(other),
        }
    }
}

impl From<validator::ValidationErrors> for SchemaError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ConstraintViolation(errors.to_string())
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = SchemaError::from(DbErr::RecordNotFound("orders".into()));
        assert!(matches!(err, SchemaError::NotFound(_)));
    }

    #[test]
    fn custom_db_err_round_trips_as_constraint_violation() {
        let original = SchemaError::ConstraintViolation("first_name exceeds 20 characters".into());
        let mapped = SchemaError::from(original.into_db_err());
        match mapped {
            SchemaError::ConstraintViolation(msg) => {
                assert!(msg.contains("first_name exceeds 20 characters"))
            }
            other => panic!("expected ConstraintViolation, got {other:?}"),
        }
    }
}
