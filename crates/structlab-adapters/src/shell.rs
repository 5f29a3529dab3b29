//! Shell configuration lookup.
//!
//! Aliases go to `~/.zshrc` when that file exists and to `~/.bashrc`
//! otherwise. There is no further search: `.bashrc` is created by the first
//! append if it is missing.

use std::path::{Path, PathBuf};

use tracing::debug;

use structlab_core::{
    application::{ApplicationError, ports::ShellConfigLocator},
    error::StructlabResult,
};

/// Z-shell configuration file name, preferred when present.
pub const ZSH_CONFIG: &str = ".zshrc";
/// Bourne-compatible fallback.
pub const BASH_CONFIG: &str = ".bashrc";

/// Locates the shell configuration file inside a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeShellConfig {
    home: Option<PathBuf>,
}

impl HomeShellConfig {
    /// Use an explicit home directory.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Use the current user's home directory, if one can be determined.
    pub fn detect() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }
}

impl ShellConfigLocator for HomeShellConfig {
    fn locate(&self) -> StructlabResult<PathBuf> {
        let home = self
            .home
            .as_deref()
            .ok_or(ApplicationError::HomeDirUnavailable)?;

        let zshrc = home.join(ZSH_CONFIG);
        let chosen = if zshrc.exists() {
            zshrc
        } else {
            home.join(BASH_CONFIG)
        };
        debug!(path = %chosen.display(), "Shell configuration located");
        Ok(chosen)
    }
}
