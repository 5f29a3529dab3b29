//! Application layer for structlab.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, AliasService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! layout data itself. Layouts live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AliasReport, AliasService, ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ShellConfigLocator, VersionControl};

pub use error::ApplicationError;
