//! In-memory filesystem adapter for dry runs and testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use structlab_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StructlabError, StructlabResult},
};

/// In-memory filesystem.
///
/// Mirrors `std::fs` semantics closely enough for scaffolding: writing a file
/// whose parent directory was never created fails, truncation and appends
/// behave like their on-disk counterparts. Listings are sorted.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted. Includes every ancestor that was implicitly
    /// created.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn write_inner(
        &self,
    ) -> StructlabResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| StructlabError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn ensure_parent(&self, path: &Path) -> StructlabResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StructlabResult<()> {
        let mut inner = self.write_inner()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn truncate_file(&self, path: &Path) -> StructlabResult<()> {
        self.write_file(path, "")
    }

    fn write_file(&self, path: &Path, content: &str) -> StructlabResult<()> {
        let mut inner = self.write_inner()?;
        inner.ensure_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> StructlabResult<()> {
        let mut inner = self.write_inner()?;
        inner.ensure_parent(path)?;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/data/raw")).unwrap();
        let dirs = fs.list_directories();
        for dir in ["/p", "/p/data", "/p/data/raw"] {
            assert!(dirs.contains(&PathBuf::from(dir)), "{dir}");
        }
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.truncate_file(Path::new("/p/README.md")).is_err());

        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.truncate_file(Path::new("/p/README.md")).unwrap();
        assert_eq!(fs.read_file(Path::new("/p/README.md")).as_deref(), Some(""));
    }

    #[test]
    fn truncate_clears_content() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a"), "hello").unwrap();
        fs.truncate_file(Path::new("/p/a")).unwrap();
        assert_eq!(fs.read_file(Path::new("/p/a")).as_deref(), Some(""));
    }

    #[test]
    fn append_accumulates() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/h")).unwrap();
        fs.append_file(Path::new("/h/.zshrc"), "a\n").unwrap();
        fs.append_file(Path::new("/h/.zshrc"), "b\n").unwrap();
        assert_eq!(fs.read_file(Path::new("/h/.zshrc")).as_deref(), Some("a\nb\n"));
    }

    #[test]
    fn listings_are_sorted() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/b")).unwrap();
        fs.create_dir_all(Path::new("/p/a")).unwrap();
        fs.truncate_file(Path::new("/p/z")).unwrap();
        fs.truncate_file(Path::new("/p/a/y")).unwrap();

        assert_eq!(
            fs.list_files(),
            vec![PathBuf::from("/p/a/y"), PathBuf::from("/p/z")]
        );
        assert_eq!(
            fs.list_directories(),
            vec![
                PathBuf::from("/"),
                PathBuf::from("/p"),
                PathBuf::from("/p/a"),
                PathBuf::from("/p/b"),
            ]
        );
    }
}
