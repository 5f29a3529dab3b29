//! Per-invocation scaffolding options.

use serde::{Deserialize, Serialize};

/// Alias registered when the caller does not pick one.
pub const DEFAULT_ALIAS_NAME: &str = "mlproj";

/// Everything a caller can tune about a single scaffold run.
///
/// Built with [`ScaffoldOptions::default`] and the `with_*` setters:
///
/// ```rust
/// use structlab_core::domain::ScaffoldOptions;
///
/// let opts = ScaffoldOptions::default()
///     .with_version_control(true)
///     .with_header_names(["parser", "lexer"]);
/// assert_eq!(opts.alias_name, "mlproj");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    pub init_version_control: bool,
    pub extra_directories: Vec<String>,
    pub extra_files: Vec<String>,
    /// Only consulted for C projects.
    pub header_names: Vec<String>,
    pub alias_name: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            init_version_control: false,
            extra_directories: Vec::new(),
            extra_files: Vec::new(),
            header_names: Vec::new(),
            alias_name: DEFAULT_ALIAS_NAME.to_string(),
        }
    }
}

impl ScaffoldOptions {
    pub fn with_version_control(mut self, enabled: bool) -> Self {
        self.init_version_control = enabled;
        self
    }

    pub fn with_extra_directories<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_directories = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extra_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_alias_name(mut self, name: impl Into<String>) -> Self {
        self.alias_name = name.into();
        self
    }
}
