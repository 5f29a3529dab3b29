//! Local filesystem adapter using std::fs.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use structlab_core::{application::ports::Filesystem, error::StructlabResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StructlabResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn truncate_file(&self, path: &Path) -> StructlabResult<()> {
        File::create(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StructlabResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> StructlabResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> structlab_core::error::StructlabError {
    use structlab_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
