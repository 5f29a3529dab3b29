//! Path plans: the directories and files one scaffold run materialises.
//!
//! Base layouts are static data keyed by [`ProjectKind`]; resolving a plan is
//! list concatenation on top of them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{ProjectKind, ScaffoldOptions};

/// Static base layout for one project kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub kind: ProjectKind,
    pub directories: &'static [&'static str],
    pub files: &'static [&'static str],
    /// Whether `header_names` expand into header/test-stub pairs.
    pub derives_headers: bool,
}

const ML_LAYOUT: Layout = Layout {
    kind: ProjectKind::MachineLearning,
    directories: &[
        "data/raw",
        "data/processed",
        "data/external",
        "notebooks",
        "scripts",
        "models",
        "reports",
        "src",
        "src/utils",
        "src/configs",
        "tests",
        "references",
    ],
    // `setup.py` and `src/__init__.py` are opaque placeholders for the
    // generated project's own tooling.
    files: &[
        ".gitignore",
        "README.md",
        "requirements.txt",
        "setup.py",
        "src/__init__.py",
    ],
    derives_headers: false,
};

const C_LAYOUT: Layout = Layout {
    kind: ProjectKind::C,
    directories: &["src", "include", "lib", "tests", "build", "docs"],
    files: &[".gitignore", "README.md"],
    derives_headers: true,
};

impl Layout {
    /// Look up the base layout for a kind.
    pub fn for_kind(kind: ProjectKind) -> &'static Layout {
        match kind {
            ProjectKind::MachineLearning => &ML_LAYOUT,
            ProjectKind::C => &C_LAYOUT,
        }
    }
}

/// Header file and test stub derived from one header base name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderPair {
    pub header: PathBuf,
    pub test_stub: PathBuf,
}

impl HeaderPair {
    pub fn new(name: &str) -> Self {
        Self {
            header: Path::new("include").join(format!("{name}.h")),
            test_stub: Path::new("tests").join(format!("test_{name}.c")),
        }
    }
}

/// Resolved, ordered set of paths to create, relative to the project root.
///
/// Paths are not validated: an extra that duplicates a base entry is simply
/// created (or truncated) twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPlan {
    pub kind: ProjectKind,
    pub directories: Vec<PathBuf>,
    /// Base files, then extras, then header pairs (header before stub).
    pub files: Vec<PathBuf>,
    pub header_pairs: Vec<HeaderPair>,
}

impl PathPlan {
    /// Resolve the plan for `kind` with the caller's extras appended.
    pub fn resolve(kind: ProjectKind, options: &ScaffoldOptions) -> Self {
        let layout = Layout::for_kind(kind);

        let directories = layout
            .directories
            .iter()
            .map(PathBuf::from)
            .chain(options.extra_directories.iter().map(PathBuf::from))
            .collect();

        let header_pairs: Vec<HeaderPair> = if layout.derives_headers {
            options
                .header_names
                .iter()
                .map(|name| HeaderPair::new(name))
                .collect()
        } else {
            Vec::new()
        };

        let files = layout
            .files
            .iter()
            .map(PathBuf::from)
            .chain(options.extra_files.iter().map(PathBuf::from))
            .chain(
                header_pairs
                    .iter()
                    .flat_map(|pair| [pair.header.clone(), pair.test_stub.clone()]),
            )
            .collect();

        Self {
            kind,
            directories,
            files,
            header_pairs,
        }
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
