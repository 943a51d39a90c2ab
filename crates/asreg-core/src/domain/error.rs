// ============================================================================
// domain/error.rs - DOCUMENT MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so the generator can report and keep going where allowed)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid port '{input}': {reason}")]
    InvalidPort { input: String, reason: String },

    #[error("Invalid {kind} namespace pattern '{pattern}': {reason}")]
    InvalidNamespacePattern {
        kind: NamespaceKind,
        pattern: String,
        reason: String,
    },

    // ========================================================================
    // Document Errors
    // ========================================================================
    #[error("Failed to serialize {document}: {reason}")]
    SerializationFailed {
        document: &'static str,
        reason: String,
    },

    #[error("Failed to parse {document}: {reason}")]
    ParseFailed {
        document: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPort { input, .. } => vec![
                format!("'{}' is not a valid port", input),
                "Ports are whole numbers between 0 and 65535".into(),
                "Re-run the generator and enter e.g. 29313".into(),
            ],
            Self::InvalidNamespacePattern { pattern, .. } => vec![
                format!("Generated pattern: {}", pattern),
                "Avoid regex metacharacters in the namespace prefix".into(),
            ],
            Self::SerializationFailed { document, .. } => vec![
                format!("The {} could not be rendered as YAML", document),
                "Nothing was written for this document".into(),
            ],
            Self::ParseFailed { document, .. } => vec![
                format!("Check that the {} file is valid YAML", document),
                "Regenerate it with: asreg generate".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPort { .. } | Self::InvalidNamespacePattern { .. } => {
                ErrorCategory::Validation
            }
            Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::SerializationFailed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Which namespace a pattern was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceKind {
    RoomAlias,
    UserId,
}

impl std::fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomAlias => write!(f, "room alias"),
            Self::UserId => write!(f, "user ID"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
