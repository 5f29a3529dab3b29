//! Command handlers, one module per subcommand.
//!
//! Each handler translates parsed arguments into calls on the core services
//! and renders the result through [`crate::output::OutputManager`].

pub mod alias;
pub mod completions;
pub mod config;
pub mod init;
pub mod new;

use std::path::{Path, PathBuf};

use crate::error::{CliResult, IntoCli as _};

/// Absolute form of a user-supplied path, without touching the filesystem.
///
/// Aliases must work from any directory, so every command resolves the
/// project root through here first.
pub(crate) fn absolute_root(path: &Path) -> CliResult<PathBuf> {
    std::path::absolute(path)
        .with_cli_context(|| format!("Failed to resolve path '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_anchored_at_cwd() {
        let abs = absolute_root(Path::new("some/proj")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/proj"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(absolute_root(tmp.path()).unwrap(), tmp.path());
    }
}
