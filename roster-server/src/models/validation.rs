//! Field bounds for person records

use std::fmt;

/// Longest accepted name, in characters
pub const MAX_NAME_CHARS: usize = 99;

/// Oldest accepted age
pub const MAX_AGE: i64 = 199;

/// Validation error for record input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name has zero length
    EmptyName,

    /// Name has more than `MAX_NAME_CHARS` characters
    NameTooLong { len: usize },

    /// Age is negative or above `MAX_AGE`
    AgeOutOfRange { age: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name is empty"),
            Self::NameTooLong { .. } => write!(f, "name is too long"),
            Self::AgeOutOfRange { .. } => {
                write!(f, "age must be between 0 and {}", MAX_AGE + 1)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a candidate name/age pair against the record bounds.
///
/// Checks run in order (empty name, name length, age range) and the
/// first failure is returned.
///
/// # Example
/// ```
/// use roster_server::models::{validate, ValidationError};
///
/// assert!(validate("Alice", 30).is_ok());
/// assert_eq!(validate("", 30), Err(ValidationError::EmptyName));
/// assert!(matches!(validate("Bob", 200), Err(ValidationError::AgeOutOfRange { .. })));
/// ```
pub fn validate(name: &str, age: i64) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong { len });
    }

    if !(0..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange { age });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(validate("a", 0).is_ok());
        assert!(validate(&"a".repeat(99), 199).is_ok());
        assert!(validate("Alice", 30).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(validate("", 30), Err(ValidationError::EmptyName));
    }

    #[test]
    fn rejects_long_name() {
        let err = validate(&"a".repeat(100), 30).unwrap_err();
        assert_eq!(err, ValidationError::NameTooLong { len: 100 });

        assert!(matches!(
            validate(&"x".repeat(250), 30),
            Err(ValidationError::NameTooLong { .. })
        ));
    }

    #[test]
    fn name_length_counts_characters() {
        // 99 two-byte characters is 198 bytes but still a valid name
        let name = "é".repeat(99);
        assert!(validate(&name, 30).is_ok());

        let name = "é".repeat(100);
        assert!(matches!(
            validate(&name, 30),
            Err(ValidationError::NameTooLong { len: 100 })
        ));
    }

    #[test]
    fn rejects_age_out_of_range() {
        for age in [-1, -500, 200, 201, i64::MAX, i64::MIN] {
            assert_eq!(
                validate("Alice", age),
                Err(ValidationError::AgeOutOfRange { age })
            );
        }
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(validate("", 500), Err(ValidationError::EmptyName));
        assert!(matches!(
            validate(&"a".repeat(100), -1),
            Err(ValidationError::NameTooLong { .. })
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "name is empty");
        assert_eq!(
            ValidationError::NameTooLong { len: 120 }.to_string(),
            "name is too long"
        );
        assert_eq!(
            ValidationError::AgeOutOfRange { age: -3 }.to_string(),
            "age must be between 0 and 200"
        );
    }
}
