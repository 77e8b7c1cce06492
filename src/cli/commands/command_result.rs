use crate::cli::exit_status::ExitStatus;
use crate::core::RunReport;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(RunSummary),
    Rewrite(RunSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: RunReport,
    /// Nothing was written to disk.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file was already present.
    pub created: bool,
}

/// Result of running i18nize commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that could not be parsed, read or written.
    pub error_count: usize,
}

impl CommandResult {
    pub fn extracted(report: RunReport, dry_run: bool) -> Self {
        Self {
            error_count: report.errors.len(),
            summary: CommandSummary::Extract(RunSummary { report, dry_run }),
        }
    }

    pub fn rewritten(report: RunReport, dry_run: bool) -> Self {
        Self {
            error_count: report.errors.len(),
            summary: CommandSummary::Rewrite(RunSummary { report, dry_run }),
        }
    }

    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            error_count: usize::from(!created),
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
