//! Validation error types

use std::fmt;

use serde::Serialize;

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Field is absent or null
    Required,

    /// Field has the wrong JSON type
    Type,

    /// Body could not be parsed at all
    Malformed,

    /// String shorter than allowed
    MinLength,

    /// Number must be strictly greater than zero
    Positive,

    /// Number must have no fractional part
    Integer,

    /// Number below the allowed minimum
    Minimum,

    /// Number above the allowed maximum
    Maximum,
}

/// A single field-level rule violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::Required,
            message: format!("{} is required", field),
        }
    }

    pub fn wrong_type(field: &'static str, expected: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::Type,
            message: format!("{} must be {}", field, expected),
        }
    }

    pub fn malformed(field: &'static str, reason: impl fmt::Display) -> Self {
        Self {
            field,
            kind: ViolationKind::Malformed,
            message: format!("{} could not be parsed: {}", field, reason),
        }
    }

    pub fn min_length(field: &'static str, min: usize) -> Self {
        Self {
            field,
            kind: ViolationKind::MinLength,
            message: format!("{} must be at least {} characters long", field, min),
        }
    }

    pub fn positive(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::Positive,
            message: format!("{} must be a positive number", field),
        }
    }

    pub fn integer(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::Integer,
            message: format!("{} must be an integer", field),
        }
    }

    pub fn minimum(field: &'static str, min: i64) -> Self {
        Self {
            field,
            kind: ViolationKind::Minimum,
            message: format!("{} must be greater than or equal to {}", field, min),
        }
    }

    pub fn maximum(field: &'static str, max: i64) -> Self {
        Self {
            field,
            kind: ViolationKind::Maximum,
            message: format!("{} must be less than or equal to {}", field, max),
        }
    }
}

/// Validation failure carrying every violated rule.
///
/// Never empty: a value that broke no rule is not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "validation error without violations");
        Self { violations }
    }

    pub fn single(violation: Violation) -> Self {
        Self::new(vec![violation])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        write!(f, "invalid input: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::new(vec![
            Violation::min_length("name", 3),
            Violation::positive("price"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: name must be at least 3 characters long; price must be a positive number"
        );
    }

    #[test]
    fn violation_serializes_kind_in_snake_case() {
        let json = serde_json::to_value(Violation::min_length("name", 3)).unwrap();
        assert_eq!(json["field"], "name");
        assert_eq!(json["kind"], "min_length");
    }
}
