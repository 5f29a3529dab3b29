//! `structlab alias` and the alias step of `structlab new`.

use std::path::Path;

use serde::Serialize;
use tracing::instrument;

use structlab_adapters::{HomeShellConfig, LocalFilesystem};
use structlab_core::application::{
    AliasReport, AliasService, ShellConfigLocator, services::alias_service::alias_line,
};

use crate::{
    cli::{AliasArgs, OutputFormat},
    commands::absolute_root,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct AliasOutput<'a> {
    dry_run: bool,
    alias: &'a AliasReport,
}

/// Register an alias for an existing directory.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: AliasArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = absolute_root(&args.path)?;
    let name = args.name.unwrap_or(config.defaults.alias_name);
    if name.trim().is_empty() {
        output.warning("Alias name is empty; nothing to register")?;
        return Ok(());
    }

    let report = register(&root, &name, false)?;

    if output.format() == OutputFormat::Json {
        return output.json(&AliasOutput {
            dry_run: false,
            alias: &report,
        });
    }
    announce(&report, false, &output)
}

/// Append the alias for `root` to the user's shell configuration.
///
/// With `dry_run` nothing is written; the report names the file that would
/// change and the line that would be appended.
pub(crate) fn register(root: &Path, name: &str, dry_run: bool) -> CliResult<AliasReport> {
    let locator = HomeShellConfig::detect();
    if dry_run {
        return Ok(AliasReport {
            alias_name: name.to_string(),
            config_file: locator.locate()?,
            line: alias_line(name, root),
        });
    }
    let service = AliasService::new(Box::new(LocalFilesystem::new()), Box::new(locator));
    Ok(service.register(root, name)?)
}

/// Human confirmation for an alias report.
pub(crate) fn announce(
    report: &AliasReport,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<()> {
    if dry_run {
        output.info(&format!(
            "Would append to {}: {}",
            report.config_file.display(),
            report.line
        ))?;
    } else {
        output.success(&format!(
            "Alias '{}' added. Reload your shell or source {} to use it.",
            report.alias_name,
            report.config_file.display()
        ))?;
    }
    Ok(())
}
