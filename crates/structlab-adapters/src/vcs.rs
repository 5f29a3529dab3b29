//! Version-control adapter: shells out to `git init <path>`.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info, instrument};

use structlab_core::{
    application::{ApplicationError, ports::VersionControl},
    error::StructlabResult,
};

/// Default program name.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Runs the `git` executable found on `PATH` (or an explicit program).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GIT_PROGRAM)
    }

    /// Use a specific executable instead of `git` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    #[instrument(skip(self), fields(program = %self.program, path = %path.display()))]
    fn init_repository(&self, path: &Path) -> StructlabResult<()> {
        debug!("Running: {} init {}", self.program, path.display());

        let output = Command::new(&self.program)
            .arg("init")
            .arg(path)
            .output()
            .map_err(|e| ApplicationError::ExternalTool {
                tool: self.program.clone(),
                reason: format!("failed to run '{} init': {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::ExternalTool {
                tool: self.program.clone(),
                reason: format!(
                    "'{} init' exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            }
            .into());
        }

        info!("Repository initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structlab_core::error::StructlabError;

    #[test]
    fn missing_program_is_external_tool_error() {
        let tmp = tempfile::tempdir().unwrap();
        let git = GitCli::with_program("structlab-no-such-vcs");

        let err = git.init_repository(tmp.path()).unwrap_err();
        match err {
            StructlabError::Application(ApplicationError::ExternalTool { tool, .. }) => {
                assert_eq!(tool, "structlab-no-such-vcs");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_external_tool_error() {
        // `false init <path>` runs fine and exits 1
        let tmp = tempfile::tempdir().unwrap();
        let err = GitCli::with_program("false")
            .init_repository(tmp.path())
            .unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn default_program_is_git() {
        assert_eq!(GitCli::default().program(), "git");
    }
}
