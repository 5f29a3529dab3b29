//! Alias Service - registers a `cd` shortcut for a project root.
//!
//! The alias is appended to whichever shell configuration file the injected
//! [`ShellConfigLocator`] picks. Nothing is de-duplicated or escaped: calling
//! this twice appends two alias lines, and a root or name containing a single
//! quote yields a broken line.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ShellConfigLocator},
    },
    error::{StructlabError, StructlabResult},
};

/// Comment line written above every alias.
pub const ALIAS_MARKER: &str = "# Alias for ML project";

/// Where an alias went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasReport {
    pub alias_name: String,
    pub config_file: PathBuf,
    /// The `alias ...` line that was appended.
    pub line: String,
}

/// Service appending alias lines to the user's shell configuration.
pub struct AliasService {
    filesystem: Box<dyn Filesystem>,
    locator: Box<dyn ShellConfigLocator>,
}

impl AliasService {
    pub fn new(filesystem: Box<dyn Filesystem>, locator: Box<dyn ShellConfigLocator>) -> Self {
        Self {
            filesystem,
            locator,
        }
    }

    /// Append `alias <alias_name>='cd <root>'` to the shell configuration.
    #[instrument(skip_all, fields(alias = %alias_name, root = %root.as_ref().display()))]
    pub fn register(
        &self,
        root: impl AsRef<Path>,
        alias_name: &str,
    ) -> StructlabResult<AliasReport> {
        let config_file = self.locator.locate()?;
        let line = alias_line(alias_name, root.as_ref());

        self.filesystem
            .append_file(&config_file, &format!("\n{ALIAS_MARKER}\n{line}\n"))
            .map_err(|e| match e {
                StructlabError::Application(ApplicationError::FilesystemError {
                    path,
                    reason,
                }) => ApplicationError::ShellConfig { path, reason }.into(),
                other => other,
            })?;

        info!(config_file = %config_file.display(), "Alias appended");
        Ok(AliasReport {
            alias_name: alias_name.to_string(),
            config_file,
            line,
        })
    }
}

/// Render the alias line for `root`.
pub fn alias_line(alias_name: &str, root: &Path) -> String {
    format!("alias {}='cd {}'", alias_name, root.display())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockShellConfigLocator};

    fn locator_at(path: &'static str) -> MockShellConfigLocator {
        let mut locator = MockShellConfigLocator::new();
        locator
            .expect_locate()
            .returning(move || Ok(PathBuf::from(path)));
        locator
    }

    #[test]
    fn alias_line_wraps_command_in_single_quotes() {
        assert_eq!(
            alias_line("proj", Path::new("/home/me/proj")),
            "alias proj='cd /home/me/proj'"
        );
    }

    #[test]
    fn register_appends_marker_and_alias() {
        let written = Arc::new(Mutex::new(Vec::<(PathBuf, String)>::new()));
        let w = Arc::clone(&written);
        let mut fs = MockFilesystem::new();
        fs.expect_append_file().times(1).returning(move |p, content| {
            w.lock().unwrap().push((p.to_path_buf(), content.to_string()));
            Ok(())
        });
        fs.expect_write_file().never();

        let service = AliasService::new(Box::new(fs), Box::new(locator_at("/home/me/.zshrc")));
        let report = service.register("/work/proj", "mlproj").unwrap();

        let written = written.lock().unwrap();
        assert_eq!(written[0].0, PathBuf::from("/home/me/.zshrc"));
        assert_eq!(
            written[0].1,
            "\n# Alias for ML project\nalias mlproj='cd /work/proj'\n"
        );
        assert_eq!(report.config_file, PathBuf::from("/home/me/.zshrc"));
        assert_eq!(report.alias_name, "mlproj");
    }

    #[test]
    fn register_twice_appends_twice() {
        let mut fs = MockFilesystem::new();
        fs.expect_append_file().times(2).returning(|_, _| Ok(()));
        let service = AliasService::new(Box::new(fs), Box::new(locator_at("/h/.bashrc")));

        service.register("/p", "p").unwrap();
        service.register("/p", "p").unwrap();
    }

    #[test]
    fn write_failure_becomes_shell_config_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_append_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        let service = AliasService::new(Box::new(fs), Box::new(locator_at("/h/.bashrc")));

        let err = service.register("/p", "p").unwrap_err();
        assert_eq!(
            err,
            StructlabError::Application(ApplicationError::ShellConfig {
                path: PathBuf::from("/h/.bashrc"),
                reason: "read-only".into(),
            })
        );
    }

    #[test]
    fn locator_failure_is_propagated() {
        let mut locator = MockShellConfigLocator::new();
        locator
            .expect_locate()
            .returning(|| Err(ApplicationError::HomeDirUnavailable.into()));
        let mut fs = MockFilesystem::new();
        fs.expect_append_file().never();
        let service = AliasService::new(Box::new(fs), Box::new(locator));

        let err = service.register("/p", "p").unwrap_err();
        assert!(matches!(
            err,
            StructlabError::Application(ApplicationError::HomeDirUnavailable)
        ));
    }
}
