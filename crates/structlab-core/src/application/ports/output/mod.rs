//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `structlab-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::StructlabResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `structlab_adapters::filesystem::LocalFilesystem` (production)
/// - `structlab_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> StructlabResult<()>;

    /// Create a file, or truncate an existing one, leaving it zero-length.
    fn truncate_file(&self, path: &Path) -> StructlabResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> StructlabResult<()>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &str) -> StructlabResult<()>;
}

/// Port for the version-control tool.
///
/// Implemented by:
/// - `structlab_adapters::vcs::GitCli` (runs `git init <path>`)
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialise an empty repository at `path`.
    ///
    /// A missing tool or a non-zero exit is an
    /// [`ApplicationError::ExternalTool`](crate::application::ApplicationError::ExternalTool).
    fn init_repository(&self, path: &Path) -> StructlabResult<()>;
}

/// Port resolving the shell configuration file that receives aliases.
///
/// Implemented by:
/// - `structlab_adapters::shell::HomeShellConfig` (`~/.zshrc`, else `~/.bashrc`)
#[cfg_attr(test, mockall::automock)]
pub trait ShellConfigLocator: Send + Sync {
    fn locate(&self) -> StructlabResult<PathBuf>;
}
