//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRUCTLAB_<SECTION>__<KEY>`, e.g.
//!    `STRUCTLAB_VCS__PROGRAM=/usr/local/bin/git`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use structlab_core::domain::DEFAULT_ALIAS_NAME;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STRUCTLAB";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for `structlab new`.
    pub defaults: Defaults,
    /// Version-control settings.
    pub vcs: VcsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// `py`, `ml` or `c`.
    pub lang: String,
    pub alias_name: String,
    pub git: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcsConfig {
    /// Executable used for `init`.
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Also write logs to this file.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                lang: "py".into(),
                alias_name: DEFAULT_ALIAS_NAME.into(),
                git: false,
            },
            vcs: VcsConfig {
                program: structlab_adapters::vcs::DEFAULT_GIT_PROGRAM.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.structlab.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "structlab")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".structlab.toml"))
    }

    /// Look up a dotted key, e.g. `defaults.alias_name`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.lang" => self.defaults.lang.clone(),
            "defaults.alias_name" => self.defaults.alias_name.clone(),
            "defaults.git" => self.defaults.git.to_string(),
            "vcs.program" => self.vcs.program.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "log.file" => self
                .log
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alias_is_mlproj() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.alias_name, "mlproj");
        assert_eq!(cfg.defaults.lang, "py");
        assert!(!cfg.defaults.git);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.vcs.program, "git");
        assert_eq!(cfg.log.file, None);
    }

    #[test]
    fn missing_required_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("structlab.toml");
        std::fs::write(
            &path,
            "[defaults]\nlang = \"c\"\nalias_name = \"work\"\n\n[vcs]\nprogram = \"/opt/git\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.defaults.lang, "c");
        assert_eq!(cfg.defaults.alias_name, "work");
        assert_eq!(cfg.vcs.program, "/opt/git");
        // untouched keys keep their defaults
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.alias_name").as_deref(), Some("mlproj"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("log.file").as_deref(), Some(""));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
