//! Application layer errors.
//!
//! These errors represent failures talking to the outside world. None of them
//! are retryable: re-running the command is the recovery mechanism.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed (permissions, missing parent, disk full).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// External tool was missing or exited non-zero.
    #[error("External tool '{tool}' failed: {reason}")]
    ExternalTool { tool: String, reason: String },

    /// Shell configuration file could not be written.
    #[error("Shell configuration error at {path}: {reason}")]
    ShellConfig { path: PathBuf, reason: String },

    /// No home directory to look for shell configuration in.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Re-running is safe: existing directories are kept".into(),
            ],
            Self::ExternalTool { tool, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", tool),
                "Or re-run without --git".into(),
            ],
            Self::ShellConfig { path, .. } => vec![
                format!("Check that {} is writable", path.display()),
                "Or re-run with --no-alias".into(),
            ],
            Self::HomeDirUnavailable => vec![
                "Set the HOME environment variable".into(),
                "Or re-run with --no-alias".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::ExternalTool { .. } => ErrorCategory::ExternalTool,
            Self::ShellConfig { .. } | Self::HomeDirUnavailable => ErrorCategory::Configuration,
        }
    }
}
