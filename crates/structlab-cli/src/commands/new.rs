//! Implementation of the `structlab new` command.
//!
//! Responsibility: translate CLI arguments into `ScaffoldOptions`, call the
//! core scaffold service, then register the alias. No business logic lives
//! here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use structlab_adapters::{GitCli, LocalFilesystem, MemoryFilesystem};
use structlab_core::{
    application::{AliasReport, ScaffoldReport, ScaffoldService, VersionControl},
    domain::{DomainError, ProjectKind, ScaffoldOptions},
    error::StructlabResult,
};

use crate::{
    cli::{Lang, NewArgs, OutputFormat},
    commands::{absolute_root, alias},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Everything `new` did (or would do), for `--output-format json`.
#[derive(Debug, Serialize)]
struct NewOutput {
    dry_run: bool,
    lang: String,
    scaffold: Option<ScaffoldReport>,
    /// Every directory and file touched, absolute and sorted. Dry runs only.
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<Preview>,
    alias: Option<AliasReport>,
}

#[derive(Debug, Serialize)]
struct Preview {
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

/// Version control stand-in for dry runs.
struct SkippedVcs;

impl VersionControl for SkippedVcs {
    fn init_repository(&self, path: &Path) -> StructlabResult<()> {
        debug!(path = %path.display(), "Dry run: skipping repository init");
        Ok(())
    }
}

/// Execute the `structlab new` command.
///
/// 1. Resolve kind, root and options (flags, then config)
/// 2. Scaffold, unless the kind has no layout
/// 3. Register the alias unless `--no-alias`
///
/// A scaffolding failure returns before step 3, so a missing `git` never
/// leaves an alias behind.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let lang = resolve_lang(args.lang, &config)?;
    let root = absolute_root(&args.path)?;
    let options = build_options(&args, &config);
    let json = output.format() == OutputFormat::Json;

    debug!(%lang, root = %root.display(), ?options, "Arguments resolved");

    if args.dry_run && !json {
        output.header("Dry run: nothing will be written")?;
    }

    let (scaffold, preview) = match lang.project_kind() {
        Some(kind) => {
            if !options.header_names.is_empty() && !kind.has_build_recipe() {
                output.warning(&format!(
                    "--headers only applies to C projects; ignoring it for '{lang}'"
                ))?;
            }
            if args.dry_run {
                let (report, preview) = preview_scaffold(kind, &root, &options)?;
                (Some(report), Some(preview))
            } else {
                (Some(run_scaffold(kind, &root, &options, &config, &output)?), None)
            }
        }
        None => {
            output.warning(&format!(
                "No project layout for '{lang}'; supported kinds are {}. Skipping scaffolding.",
                supported_kinds()
            ))?;
            (None, None)
        }
    };

    if !json {
        match (&scaffold, &preview) {
            (Some(report), Some(preview)) => {
                render_preview(report, preview, options.init_version_control, &output)?
            }
            (Some(report), None) => render_report(report, &output)?,
            _ => {}
        }
    }

    let alias = if args.no_alias {
        debug!("Alias registration skipped");
        None
    } else if options.alias_name.trim().is_empty() {
        output.warning("Alias name is empty; skipping alias registration")?;
        None
    } else {
        let report = alias::register(&root, &options.alias_name, args.dry_run)?;
        if !json {
            alias::announce(&report, args.dry_run, &output)?;
        }
        Some(report)
    };

    if json {
        output.json(&NewOutput {
            dry_run: args.dry_run,
            lang: lang.to_string(),
            scaffold,
            preview,
            alias,
        })?;
    }

    Ok(())
}

/// Flag, then `defaults.lang`. An invalid config value is a configuration
/// error rather than a usage error.
fn resolve_lang(flag: Option<Lang>, config: &AppConfig) -> CliResult<Lang> {
    if let Some(lang) = flag {
        return Ok(lang);
    }
    let value = config.defaults.lang.trim();
    if value.eq_ignore_ascii_case("py") {
        return Ok(Lang::Py);
    }
    let kind: ProjectKind = value.parse().map_err(|err: DomainError| CliError::ConfigError {
        message: format!("defaults.lang = '{value}' is not one of py, {}", supported_kinds()),
        source: Some(Box::new(err)),
    })?;
    Ok(Lang::from(kind))
}

fn build_options(args: &NewArgs, config: &AppConfig) -> ScaffoldOptions {
    let alias_name = args
        .alias_name
        .clone()
        .unwrap_or_else(|| config.defaults.alias_name.clone());

    ScaffoldOptions::default()
        .with_version_control(args.git || config.defaults.git)
        .with_extra_directories(args.extra_dirs.iter().cloned())
        .with_extra_files(args.extra_files.iter().cloned())
        .with_header_names(args.headers.iter().cloned())
        .with_alias_name(alias_name)
}

fn supported_kinds() -> String {
    ProjectKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_scaffold(
    kind: ProjectKind,
    root: &Path,
    options: &ScaffoldOptions,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ScaffoldReport> {
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::with_program(config.vcs.program.clone())),
    );

    let spinner = output.spinner(&format!("Creating {} project...", kind.as_str()));
    let result = service.create(kind, root, options);
    spinner.finish_and_clear();

    let report = result?;
    info!(root = %report.root.display(), "Scaffold completed");
    Ok(report)
}

/// Run the scaffolder against an in-memory filesystem.
fn preview_scaffold(
    kind: ProjectKind,
    root: &Path,
    options: &ScaffoldOptions,
) -> CliResult<(ScaffoldReport, Preview)> {
    let filesystem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()), Box::new(SkippedVcs));
    let mut report = service.create(kind, root, options)?;
    // Nothing ran; the caller reports the request separately.
    report.version_control_initialized = false;

    // Ancestors of the root are bookkeeping, not something we create.
    let directories = filesystem
        .list_directories()
        .into_iter()
        .filter(|d| d.starts_with(root))
        .collect();
    let preview = Preview {
        directories,
        files: filesystem.list_files(),
    };
    Ok((report, preview))
}

fn render_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if report.version_control_initialized {
        output.success(&format!(
            "Initialized an empty Git repository in {}",
            report.root.display()
        ))?;
    }
    output.success(&format!(
        "Project structure created at {}",
        report.root.display()
    ))?;
    if let Some(recipe) = &report.build_recipe {
        output.info(&format!("Build recipe written to {}", recipe.display()))?;
    }
    Ok(())
}

fn render_preview(
    report: &ScaffoldReport,
    preview: &Preview,
    init_version_control: bool,
    output: &OutputManager,
) -> CliResult<()> {
    output.info(&format!(
        "Would create {} directories and {} files at {}",
        preview.directories.len(),
        preview.files.len(),
        report.root.display()
    ))?;
    for dir in &preview.directories {
        output.print(&format!("  dir   {}", dir.display()))?;
    }
    for file in &preview.files {
        output.print(&format!("  file  {}", file.display()))?;
    }
    if init_version_control {
        output.info(&format!(
            "Would initialize a Git repository in {}",
            report.root.display()
        ))?;
    }
    Ok(())
}
