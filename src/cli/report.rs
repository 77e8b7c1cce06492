//! Report formatting and printing utilities.
//!
//! Summaries go to stdout, per-file failures to stderr. Kept separate from the
//! engine so i18nize can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, RunSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::walker::FileFailure;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract_to(summary, &mut stdout),
        CommandSummary::Rewrite(summary) => print_rewrite_to(summary, verbose, &mut stdout),
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }

    if let CommandSummary::Extract(summary) | CommandSummary::Rewrite(summary) = &result.summary {
        print_failures_to(&summary.report.errors, &mut io::stderr().lock());
    }
}

/// Print the extraction summary to a custom writer.
pub fn print_extract_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let totals = summary.report.totals;
    let message = format!(
        "{} {} {} from {} {}",
        if summary.dry_run {
            "Would extract"
        } else {
            "Extracted"
        },
        totals.strings,
        plural(totals.strings, "string", "strings"),
        totals.files,
        plural(totals.files, "file", "files"),
    );
    print_outcome(&message, summary, writer);
}

/// Print the rewrite summary to a custom writer.
///
/// With `verbose`, every rewritten file is listed with its wrapped-literal count.
pub fn print_rewrite_to<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;
    let totals = report.totals;

    if verbose {
        for file in report.files.iter().filter(|file| file.strings > 0) {
            let _ = writeln!(
                writer,
                "  {} {} ({})",
                "-->".blue(),
                file.path,
                file.strings
            );
        }
    }

    let mut message = format!(
        "{} {} {} in {} {}",
        if summary.dry_run { "Would wrap" } else { "Wrapped" },
        totals.strings,
        plural(totals.strings, "string", "strings"),
        totals.rewritten_files,
        plural(totals.rewritten_files, "file", "files"),
    );
    if totals.init_artifacts > 0 {
        message.push_str(&format!(
            ", {} {} {}",
            totals.init_artifacts,
            plural(totals.init_artifacts, "package", "packages"),
            if summary.dry_run {
                "would be initialized"
            } else {
                "initialized"
            },
        ));
    }
    print_outcome(&message, summary, writer);
}

/// Print the init outcome to a custom writer.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

/// Print per-file failures to a custom writer.
pub fn print_failures_to<W: Write>(failures: &[FileFailure], writer: &mut W) {
    if failures.is_empty() {
        return;
    }

    for failure in failures {
        let _ = writeln!(
            writer,
            "{}: {}  {}",
            "error".bold().red(),
            failure.message,
            failure.kind.dimmed().cyan()
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue(), failure.path);
    }
    let _ = writeln!(
        writer,
        "{} {} {} could not be processed",
        FAILURE_MARK.red(),
        failures.len(),
        plural(failures.len(), "file", "files"),
    );
}

fn print_outcome<W: Write>(message: &str, summary: &RunSummary, writer: &mut W) {
    if summary.dry_run {
        let _ = writeln!(writer, "{}", message.yellow().bold());
        let _ = writeln!(writer, "Run without {} to write these changes.", "--dry-run".cyan());
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
