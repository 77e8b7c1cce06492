use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init, rewrite::rewrite},
};
use anyhow::Result;

/// Dispatch to the command handler.
///
/// Returns `Err` for fatal problems (bad config, unreadable exclusion list,
/// missing source directory). Per-file failures are part of the result.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Rewrite(cmd)) => rewrite(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
