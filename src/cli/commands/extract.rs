use anyhow::{Context, Result};

use super::CommandResult;
use crate::cli::args::ExtractCommand;
use crate::config::{Overrides, resolve_settings};
use crate::core;

/// Write catalogs for every Go file under the source directory.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let common = args.common;

    let mut settings = resolve_settings(
        &common.directory,
        Overrides {
            locale: common.locale,
            excluded_strings_file: common.excluded_strings_file,
            po: args.po,
            skip_test_files: args.skip_test_files,
            ..Default::default()
        },
    )?;
    settings.options.recursive = common.recursive;
    settings.options.dry_run = common.dry_run;

    let report = core::extract(&settings.options, &settings.exclusions)
        .with_context(|| format!("Cannot extract from {}", common.directory.display()))?;

    Ok(CommandResult::extracted(report, common.dry_run))
}
