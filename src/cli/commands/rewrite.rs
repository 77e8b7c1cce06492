use anyhow::{Context, Result};

use super::CommandResult;
use crate::cli::args::RewriteCommand;
use crate::config::{Overrides, resolve_settings};
use crate::core;

/// Wrap translatable literals and generate one `i18n_init.go` per touched package.
pub fn rewrite(cmd: RewriteCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let common = args.common;

    let mut settings = resolve_settings(
        &common.directory,
        Overrides {
            locale: common.locale,
            wrapper_symbol: args.wrapper,
            runtime_package: args.runtime_package,
            excluded_strings_file: common.excluded_strings_file,
            ..Default::default()
        },
    )?;
    settings.options.recursive = common.recursive;
    settings.options.dry_run = common.dry_run;
    settings.options.output_dir = args.output_dir;

    let report = core::rewrite(&settings.options, &settings.exclusions)
        .with_context(|| format!("Cannot rewrite {}", common.directory.display()))?;

    Ok(CommandResult::rewritten(report, common.dry_run))
}
