//! Field-constraint checks shared by the entity `before_save` hooks and the
//! `validator`-derived models.
//!
//! Postgres truncates excess decimal scale instead of rejecting it, so the
//! numeric(10,2) contract is enforced here before a statement is issued.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::error::{SchemaError, SchemaResult};

/// Maximum integer digits for a numeric(10,2) column: 10 total - 2 fractional.
const DECIMAL_MAX_INTEGER_DIGITS: u32 = 8;
const DECIMAL_MAX_SCALE: u32 = 2;

/// Reject strings longer than `max` characters.
pub fn char_len_at_most(field: &str, value: &str, max: usize) -> SchemaResult<()> {
    if value.chars().count() > max {
        return Err(SchemaError::ConstraintViolation(format!(
            "{field} exceeds {max} characters"
        )));
    }
    Ok(())
}

/// Reject values that do not fit a numeric(10,2) column: more than 2
/// fractional digits or more than 8 integer digits.
pub fn decimal_10_2(field: &str, value: &Decimal) -> SchemaResult<()> {
    let normalized = value.normalize();
    if normalized.scale() > DECIMAL_MAX_SCALE {
        return Err(SchemaError::ConstraintViolation(format!(
            "{field} has more than {DECIMAL_MAX_SCALE} fractional digits"
        )));
    }
    let limit = Decimal::from(10u64.pow(DECIMAL_MAX_INTEGER_DIGITS));
    if normalized.abs() >= limit {
        return Err(SchemaError::ConstraintViolation(format!(
            "{field} exceeds {DECIMAL_MAX_INTEGER_DIGITS} integer digits"
        )));
    }
    Ok(())
}

pub fn email_format(field: &str, value: &str) -> SchemaResult<()> {
    if !validator::validate_email(value) {
        return Err(SchemaError::ConstraintViolation(format!(
            "{field} is not a valid email address"
        )));
    }
    Ok(())
}

/// `#[validate(custom = "...")]` adapter for numeric(10,2) fields.
pub fn validate_decimal_10_2(value: &Decimal) -> Result<(), ValidationError> {
    decimal_10_2("value", value).map_err(|_| ValidationError::new("decimal_10_2"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn length_boundary_is_inclusive() {
        assert!(char_len_at_most("name", "a".repeat(20).as_str(), 20).is_ok());
        assert!(char_len_at_most("name", "a".repeat(21).as_str(), 20).is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 20 two-byte characters still fit a varchar(20).
        let value = "й".repeat(20);
        assert!(char_len_at_most("name", &value, 20).is_ok());
    }

    #[test]
    fn decimal_scale_over_two_is_rejected() {
        assert!(decimal_10_2("price", &dec!(19.99)).is_ok());
        assert!(decimal_10_2("price", &dec!(19.999)).is_err());
    }

    #[test]
    fn decimal_trailing_zeros_do_not_count_as_scale() {
        assert!(decimal_10_2("price", &dec!(19.9900)).is_ok());
    }

    #[test]
    fn decimal_integer_digits_capped_at_eight() {
        assert!(decimal_10_2("price", &dec!(99999999.99)).is_ok());
        assert!(decimal_10_2("price", &dec!(100000000.00)).is_err());
        assert!(decimal_10_2("price", &dec!(-100000000.00)).is_err());
    }

    #[test]
    fn email_format_rejects_garbage() {
        assert!(email_format("email", "a@b.com").is_ok());
        assert!(email_format("email", "not-an-email").is_err());
    }
}
