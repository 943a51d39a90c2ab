//! Application layer errors.
//!
//! These errors represent failures talking to the outside world (the
//! operator's terminal, the filesystem), not bad document content.
//! Content errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Reading an answer from the input source failed or hit end of input.
    #[error("Failed to read user input: {reason}")]
    InputFailed { reason: String },

    /// Writing to the console failed.
    #[error("Failed to write output: {reason}")]
    OutputFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A document that should exist does not.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// In-memory adapter lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputFailed { .. } => vec![
                "The generator needs an interactive terminal or a piped answer per prompt".into(),
                "Re-run the generator to start over".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::NotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Generate one with: asreg generate".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputFailed { .. } => ErrorCategory::Input,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::OutputFailed { .. } | Self::FilesystemError { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
