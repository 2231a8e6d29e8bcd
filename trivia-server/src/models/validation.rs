//! Validation error types

use std::fmt;

use serde::Deserialize;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its allowed range
    OutOfRange { field: &'static str, min: i32, max: i32, value: i32 },

    /// Field is required but was not supplied
    Missing { field: &'static str },

    /// Field should hold an integer
    NotANumber { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, min, max, value } => {
                write!(f, "{} must be between {} and {}, got {}", field, min, max, value)
            }
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotANumber { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Integer field that clients send either as a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    Number(i64),
    Text(String),
}

impl LenientInt {
    /// Parse into an `i32`; blank text yields `None`.
    pub fn to_i32(&self, field: &'static str) -> Result<Option<i32>, ValidationError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) if s.trim().is_empty() => return Ok(None),
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| ValidationError::NotANumber {
                field,
                value: s.clone(),
            })?,
        };

        i32::try_from(value)
            .map(Some)
            .map_err(|_| ValidationError::NotANumber {
                field,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "question",
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "question exceeds maximum length of 1000 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
            value: 9,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5, got 9");
    }

    #[test]
    fn lenient_int_accepts_numbers_and_numeric_text() {
        let parse = |v: serde_json::Value| {
            serde_json::from_value::<LenientInt>(v).unwrap().to_i32("category")
        };

        assert_eq!(parse(serde_json::json!(3)), Ok(Some(3)));
        assert_eq!(parse(serde_json::json!("4")), Ok(Some(4)));
        assert_eq!(parse(serde_json::json!(" 5 ")), Ok(Some(5)));
        assert_eq!(parse(serde_json::json!("")), Ok(None));
        assert!(matches!(
            parse(serde_json::json!("four")),
            Err(ValidationError::NotANumber { field: "category", .. })
        ));
        assert!(parse(serde_json::json!(9_999_999_999_i64)).is_err());
    }
}
