//! Integration tests for structlab-core through its public API.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use structlab_core::{
    application::{ApplicationError, ports::*},
    prelude::*,
};

/// Records every call in order. Clones share the log.
#[derive(Clone, Default)]
struct RecordingFs {
    calls: Arc<Mutex<Vec<(&'static str, PathBuf)>>>,
    fail_appends: bool,
}

impl RecordingFs {
    fn calls(&self) -> Vec<(&'static str, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, path: &Path) {
        self.calls.lock().unwrap().push((op, path.to_path_buf()));
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> StructlabResult<()> {
        self.record("mkdir", path);
        Ok(())
    }

    fn truncate_file(&self, path: &Path) -> StructlabResult<()> {
        self.record("truncate", path);
        Ok(())
    }

    fn write_file(&self, path: &Path, _content: &str) -> StructlabResult<()> {
        self.record("write", path);
        Ok(())
    }

    fn append_file(&self, path: &Path, _content: &str) -> StructlabResult<()> {
        if self.fail_appends {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only file system".into(),
            }
            .into());
        }
        self.record("append", path);
        Ok(())
    }
}

struct FailingVcs;

impl VersionControl for FailingVcs {
    fn init_repository(&self, _path: &Path) -> StructlabResult<()> {
        Err(ApplicationError::ExternalTool {
            tool: "git".into(),
            reason: "not installed".into(),
        }
        .into())
    }
}

struct FixedLocator(PathBuf);

impl ShellConfigLocator for FixedLocator {
    fn locate(&self) -> StructlabResult<PathBuf> {
        Ok(self.0.clone())
    }
}

#[test]
fn c_scaffold_creates_every_directory_before_any_file() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(FailingVcs));
    let opts = ScaffoldOptions::default().with_header_names(["foo"]);

    let report = service.create(ProjectKind::C, "/w/c", &opts).unwrap();

    let calls = fs.calls();
    let first_file = calls.iter().position(|(op, _)| *op != "mkdir").unwrap();
    assert!(calls[first_file..].iter().all(|(op, _)| *op != "mkdir"));
    assert_eq!(calls[0], ("mkdir", PathBuf::from("/w/c")));
    assert_eq!(calls.last().unwrap(), &("write", PathBuf::from("/w/c/Makefile")));
    assert_eq!(report.build_recipe, Some(PathBuf::from("/w/c/Makefile")));
    assert!(!report.version_control_initialized);
}

#[test]
fn vcs_failure_surfaces_after_files_exist() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(FailingVcs));
    let opts = ScaffoldOptions::default().with_version_control(true);

    let err = service
        .create(ProjectKind::MachineLearning, "/w/ml", &opts)
        .unwrap_err();

    assert!(err.to_string().contains("git"));
    assert!(
        fs.calls()
            .contains(&("truncate", PathBuf::from("/w/ml/README.md")))
    );
}

#[test]
fn alias_write_failure_is_a_shell_config_error() {
    let fs = RecordingFs {
        fail_appends: true,
        ..Default::default()
    };
    let service = AliasService::new(
        Box::new(fs),
        Box::new(FixedLocator(PathBuf::from("/home/u/.bashrc"))),
    );

    let err = service.register("/w/p", "p").unwrap_err();

    assert_eq!(
        err,
        StructlabError::Application(ApplicationError::ShellConfig {
            path: PathBuf::from("/home/u/.bashrc"),
            reason: "read-only file system".into(),
        })
    );
}

#[test]
fn layouts_cover_every_kind() {
    for kind in ProjectKind::ALL {
        assert_eq!(Layout::for_kind(kind).kind, kind);
    }
}
