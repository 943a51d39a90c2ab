//! Unified error handling for asreg core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for asreg core operations.
///
/// Every variant aborts a generator run; soft exits (a "no" at a checkpoint)
/// are not errors and are reported through `GenerationOutcome` instead.
#[derive(Debug, Error, Clone)]
pub enum AsregError {
    /// Errors from the domain layer (bad answers, broken documents).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (input, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl AsregError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Input,
    Internal,
}

/// Convenient result type alias.
pub type AsregResult<T> = Result<T, AsregError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn invalid_port_is_validation() {
        let err: AsregError = DomainError::InvalidPort {
            input: "abc".into(),
            reason: "invalid digit found in string".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err: AsregError = ApplicationError::NotFound {
            path: PathBuf::from("config.yaml"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn serialization_failure_is_internal() {
        let err: AsregError = DomainError::SerializationFailed {
            document: "config",
            reason: "x".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
