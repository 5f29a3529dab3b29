// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The domain layer is almost entirely static data, so the only thing that
/// can go wrong here is being handed a selector it does not recognise.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown project kind: {0}")]
    UnknownProjectKind(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownProjectKind(kind) => vec![
                format!("'{}' is not a known project kind", kind),
                "Supported kinds:".into(),
                "  • ml - Machine-learning project layout".into(),
                "  • c  - C project layout with Makefile".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownProjectKind(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
