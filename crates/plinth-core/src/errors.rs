//! Unified error system for the platform registry
//!
//! A single error type covers every failure the registry and its
//! collaborators can raise. Each variant carries a human-readable message
//! that names the offending value.

use serde::{Deserialize, Serialize};

/// Unified error type for all Plinth operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PlatformError {
    /// A value is not a member of its closed enumeration
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message naming the rejected value
        message: String,
    },

    /// A provider-selection flag names an unsupported provider
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message naming the rejected provider verbatim
        message: String,
    },

    /// An abstract contract operation was invoked without an override
    #[error("Not implemented: {message}")]
    NotImplemented {
        /// Error message naming the operation
        message: String,
    },

    /// A batched request names the same target more than once
    #[error("Duplicate specification: {message}")]
    DuplicateSpecification {
        /// Error message describing the duplicated entry
        message: String,
    },

    /// A lazily loaded backend implementation could not be constructed
    #[error("Failed to load {backend} implementation: {message}")]
    ImplementationLoad {
        /// Name of the backend that failed to load
        backend: String,
        /// Cause of the failure
        message: String,
    },

    /// A storage collaborator failed while performing I/O
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },
}

impl PlatformError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a not implemented error
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
        }
    }

    /// Create a duplicate specification error
    pub fn duplicate_specification(message: impl Into<String>) -> Self {
        Self::DuplicateSpecification {
            message: message.into(),
        }
    }

    /// Create an implementation load error
    pub fn implementation_load(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ImplementationLoad {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether this error reflects bad caller input rather than a runtime fault
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::DuplicateSpecification { .. }
        )
    }
}

/// Standard Result type for Plinth operations
pub type Result<T> = std::result::Result<T, PlatformError>;

impl From<std::io::Error> for PlatformError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}

impl From<toml::de::Error> for PlatformError {
    fn from(err: toml::de::Error) -> Self {
        Self::invalid_configuration(format!("Invalid TOML: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = PlatformError::invalid_argument("Invalid model name: foo");
        assert!(matches!(err, PlatformError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Invalid argument: Invalid model name: foo");
    }

    #[test]
    fn test_implementation_load_names_backend() {
        let err = PlatformError::implementation_load("cloud_storage", "bucket not configured");
        assert_eq!(
            err.to_string(),
            "Failed to load cloud_storage implementation: bucket not configured"
        );
    }

    #[test]
    fn test_caller_errors() {
        assert!(PlatformError::duplicate_specification("x").is_caller_error());
        assert!(PlatformError::invalid_argument("x").is_caller_error());
        assert!(!PlatformError::not_implemented("x").is_caller_error());
        assert!(!PlatformError::invalid_configuration("x").is_caller_error());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PlatformError::from(io_err);
        assert!(matches!(err, PlatformError::Storage { .. }));
    }
}
