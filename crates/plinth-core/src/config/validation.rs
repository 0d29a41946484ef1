//! Configuration validation utilities

use crate::errors::PlatformError;
use std::fmt;

/// Configuration validation result
pub type ValidationResult = Result<(), ValidationError>;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is required but missing or empty
    Required {
        /// Dotted field path
        field: String,
    },
    /// Value is out of acceptable range
    OutOfRange {
        /// Dotted field path
        field: String,
        /// Inclusive lower bound
        min: Option<f64>,
        /// Inclusive upper bound
        max: Option<f64>,
        /// Rejected value
        actual: f64,
    },
    /// Value format is invalid
    InvalidFormat {
        /// Dotted field path
        field: String,
        /// Description of the accepted format
        expected: String,
        /// Rejected value
        actual: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required { field } => {
                write!(f, "Field '{field}' is required but missing")
            }
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                let range_desc = match (min, max) {
                    (Some(min), Some(max)) => format!("between {min} and {max}"),
                    (Some(min), None) => format!("at least {min}"),
                    (None, Some(max)) => format!("at most {max}"),
                    (None, None) => "in valid range".to_string(),
                };
                write!(f, "Field '{field}' must be {range_desc} (got {actual})")
            }
            ValidationError::InvalidFormat {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Field '{field}' has invalid format. Expected: {expected}, got: {actual}"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for PlatformError {
    fn from(err: ValidationError) -> Self {
        PlatformError::invalid_configuration(err.to_string())
    }
}

/// Accumulates validation failures across a configuration tree
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<ValidationError>,
    field_prefix: String,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for a nested section
    pub fn for_field(&self, field_name: &str) -> Self {
        Self {
            errors: Vec::new(),
            field_prefix: self.full_field_name(field_name),
        }
    }

    /// Validate that an optional string, when present, is not blank
    pub fn not_blank(&mut self, field_name: &str, value: Option<&str>) -> &mut Self {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            self.errors.push(ValidationError::Required {
                field: self.full_field_name(field_name),
            });
        }
        self
    }

    /// Validate that a string is present and not blank
    pub fn required(&mut self, field_name: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Required {
                field: self.full_field_name(field_name),
            });
        }
        self
    }

    /// Validate that a number is within range
    pub fn range<T>(
        &mut self,
        field_name: &str,
        value: T,
        min: Option<T>,
        max: Option<T>,
    ) -> &mut Self
    where
        T: PartialOrd + Copy + Into<f64>,
    {
        let below = min.is_some_and(|min| value < min);
        let above = max.is_some_and(|max| value > max);

        if below || above {
            self.errors.push(ValidationError::OutOfRange {
                field: self.full_field_name(field_name),
                min: min.map(Into::into),
                max: max.map(Into::into),
                actual: value.into(),
            });
        }
        self
    }

    /// Validate a hostname
    pub fn hostname(&mut self, field_name: &str, value: &str) -> &mut Self {
        let is_valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
            && !value.starts_with('-')
            && !value.ends_with('-');

        if !is_valid {
            self.errors.push(ValidationError::InvalidFormat {
                field: self.full_field_name(field_name),
                expected: "hostname".to_string(),
                actual: value.to_string(),
            });
        }
        self
    }

    /// Merge errors from a nested validator
    pub fn merge(&mut self, other: ConfigValidator) {
        self.errors.extend(other.errors);
    }

    /// First error, if any
    pub fn result(self) -> ValidationResult {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// All accumulated errors
    pub fn all_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn full_field_name(&self, field_name: &str) -> String {
        if self.field_prefix.is_empty() {
            field_name.to_string()
        } else {
            format!("{}.{}", self.field_prefix, field_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_field_names() {
        let root = ConfigValidator::new();
        let mut cache = root.for_field("cache");
        cache.hostname("host", "-bad-");
        let errors = cache.all_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("'cache.host'"));
    }

    #[test]
    fn test_range() {
        let mut validator = ConfigValidator::new();
        validator.range("port", 0u32, Some(1), Some(65535));
        let err = validator.result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'port' must be between 1 and 65535 (got 0)"
        );
    }

    #[test]
    fn test_blank_optional_rejected_but_absent_allowed() {
        let mut validator = ConfigValidator::new();
        validator.not_blank("bucket", None);
        validator.not_blank("project", Some("  "));
        let errors = validator.all_errors();
        assert_eq!(
            errors,
            vec![ValidationError::Required {
                field: "project".to_string()
            }]
        );
    }
}
