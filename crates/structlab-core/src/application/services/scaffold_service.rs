//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the path plan for the project kind
//! 2. Create root, directories, then files
//! 3. Write the build recipe (C only)
//! 4. Initialise version control (optional)
//!
//! Every step is idempotent except file creation, which truncates existing
//! files to zero length. There is no rollback: a failed run leaves whatever
//! was created so far, and re-running completes the remainder.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, VersionControl},
    domain::{PathPlan, ProjectKind, ScaffoldOptions, build_recipe},
    error::StructlabResult,
};

/// What a scaffold run did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub plan: PathPlan,
    /// Absolute location of the build recipe, when one was written.
    pub build_recipe: Option<PathBuf>,
    pub version_control_initialized: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use structlab_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(vcs),        // impl VersionControl
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, vcs: Box<dyn VersionControl>) -> Self {
        Self { filesystem, vcs }
    }

    /// Scaffold a project of `kind` at `root`.
    #[instrument(
        skip_all,
        fields(kind = %kind, root = %root.as_ref().display())
    )]
    pub fn create(
        &self,
        kind: ProjectKind,
        root: impl AsRef<Path>,
        options: &ScaffoldOptions,
    ) -> StructlabResult<ScaffoldReport> {
        let root = root.as_ref();
        let plan = PathPlan::resolve(kind, options);
        info!(
            directories = plan.directory_count(),
            files = plan.file_count(),
            "Plan resolved"
        );

        self.write_plan(root, &plan)?;

        let build_recipe = if kind.has_build_recipe() {
            let path = root.join(build_recipe::FILE_NAME);
            self.filesystem.write_file(&path, build_recipe::content())?;
            debug!(path = %path.display(), "Build recipe written");
            Some(path)
        } else {
            None
        };

        if options.init_version_control {
            self.vcs.init_repository(root)?;
            info!("Repository initialised");
        }

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            root: root.to_path_buf(),
            plan,
            build_recipe,
            version_control_initialized: options.init_version_control,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create root, then every directory, then every file.
    ///
    /// Directories strictly precede files so planned parents always exist.
    /// A user-supplied file whose parent is not planned gets it created on
    /// the spot.
    fn write_plan(&self, root: &Path, plan: &PathPlan) -> StructlabResult<()> {
        self.filesystem.create_dir_all(root)?;

        for dir in &plan.directories {
            let path = root.join(dir);
            debug!(path = %path.display(), "create directory");
            self.filesystem.create_dir_all(&path)?;
        }

        for file in &plan.files {
            let planned_parent = match file.parent() {
                None => true,
                Some(parent) => {
                    parent.as_os_str().is_empty() || plan.directories.iter().any(|d| d == parent)
                }
            };
            if !planned_parent {
                if let Some(parent) = file.parent() {
                    self.filesystem.create_dir_all(&root.join(parent))?;
                }
            }

            let path = root.join(file);
            debug!(path = %path.display(), "truncate file");
            self.filesystem.truncate_file(&path)?;
        }

        Ok(())
    }
}
