//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use structlab_core::domain::ProjectKind as CoreKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "structlab",
    bin_name = "structlab",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project structure generator",
    long_about = "structlab creates the directory skeleton for machine-learning \
                  and C projects, optionally runs `git init`, and registers a \
                  shell alias that jumps to the new project.",
    after_help = "EXAMPLES:\n\
        \x20 structlab new ./churn-model --lang ml --git\n\
        \x20 structlab new ./vecmath --lang c --headers vector matrix --alias-name vm\n\
        \x20 structlab alias ./churn-model --name churn\n\
        \x20 structlab completions bash > /usr/share/bash-completion/completions/structlab",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project skeleton.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 structlab new ./proj --lang ml\n\
            \x20 structlab new ./proj --lang ml --extra-dirs experiments --extra-files Dockerfile\n\
            \x20 structlab new ./proj --lang c --headers parser lexer --git\n\
            \x20 structlab new ./proj --lang c --dry-run"
    )]
    New(NewArgs),

    /// Register a `cd` alias for an existing directory.
    #[command(
        about = "Register a shell alias for a project",
        after_help = "EXAMPLES:\n\
            \x20 structlab alias ./proj\n\
            \x20 structlab alias ~/work/vecmath --name vm"
    )]
    Alias(AliasArgs),

    /// Initialise a structlab configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 structlab init\n\
            \x20 structlab init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 structlab completions bash > ~/.local/share/bash-completion/completions/structlab\n\
            \x20 structlab completions zsh  > ~/.zfunc/_structlab\n\
            \x20 structlab completions fish > ~/.config/fish/completions/structlab.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the structlab configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 structlab config get defaults.alias_name\n\
            \x20 structlab config list\n\
            \x20 structlab config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `structlab new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Where the project is created. Missing parents are created too.
    #[arg(value_name = "PATH", help = "Path where the project will be created")]
    pub path: PathBuf,

    /// Project kind.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "KIND",
        value_enum,
        help = "Project kind (default from config, else `py`)"
    )]
    pub lang: Option<Lang>,

    /// Run `git init` in the new project.
    #[arg(long = "git", help = "Initialize a Git repository in the project directory")]
    pub git: bool,

    /// Additional directories, relative to the project root.
    #[arg(
        long = "extra-dirs",
        visible_alias = "extra_dirs",
        value_name = "DIR",
        num_args = 0..,
        help = "Additional directories to create"
    )]
    pub extra_dirs: Vec<String>,

    /// Additional empty files, relative to the project root.
    #[arg(
        long = "extra-files",
        visible_alias = "extra_files",
        value_name = "FILE",
        num_args = 0..,
        help = "Additional files to create"
    )]
    pub extra_files: Vec<String>,

    /// Header base names; each yields `include/<name>.h` and
    /// `tests/test_<name>.c`.
    #[arg(
        long = "headers",
        value_name = "NAME",
        num_args = 0..,
        help = "Header files to stub out (C projects)"
    )]
    pub headers: Vec<String>,

    /// Alias name to register.
    #[arg(
        long = "alias-name",
        visible_alias = "alias_name",
        value_name = "NAME",
        help = "Name of the alias for the project directory"
    )]
    pub alias_name: Option<String>,

    /// Do not touch the shell configuration.
    #[arg(
        long = "no-alias",
        conflicts_with = "alias_name",
        help = "Skip alias registration"
    )]
    pub no_alias: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── alias ─────────────────────────────────────────────────────────────────────

/// Arguments for `structlab alias`.
#[derive(Debug, Args)]
pub struct AliasArgs {
    /// Directory the alias changes into.
    #[arg(value_name = "PATH", help = "Project directory")]
    pub path: PathBuf,

    /// Alias name (default from config, else `mlproj`).
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Alias name")]
    pub name: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `structlab init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `structlab completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `structlab config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.alias_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Lang {
    /// Plain Python: accepted, but has no layout yet.
    Py,
    /// Machine-learning layout.
    #[value(alias = "machine-learning")]
    Ml,
    /// C layout with Makefile.
    C,
}

impl Lang {
    /// The core kind this selector scaffolds, if any.
    pub fn project_kind(self) -> Option<CoreKind> {
        match self {
            Self::Py => None,
            Self::Ml => Some(CoreKind::MachineLearning),
            Self::C => Some(CoreKind::C),
        }
    }
}

impl From<CoreKind> for Lang {
    fn from(kind: CoreKind) -> Self {
        match kind {
            CoreKind::MachineLearning => Self::Ml,
            CoreKind::C => Self::C,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Py => write!(f, "py"),
            Self::Ml => write!(f, "ml"),
            Self::C => write!(f, "c"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
