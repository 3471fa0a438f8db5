use crate::utils::error::{GameError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(GameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// `low..=high` must hold at least one number.
pub fn validate_bounds(low: i64, high: i64) -> Result<()> {
    if low > high {
        return Err(GameError::InvalidConfigValueError {
            field: "min".to_string(),
            value: low.to_string(),
            reason: format!("Lower bound must not exceed upper bound {}", high),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_attempts", 1, 1).is_ok());
        let err = validate_positive_number("max_attempts", 0, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for max_attempts: Value must be at least 1"
        );
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max_attempts", 5u32, 1, 1000).is_ok());
        assert!(validate_range("max_attempts", 1001u32, 1, 1000).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(1, 100).is_ok());
        assert!(validate_bounds(7, 7).is_ok());

        let err = validate_bounds(10, 1).unwrap_err();
        match err {
            GameError::InvalidConfigValueError { field, .. } => assert_eq!(field, "min"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
