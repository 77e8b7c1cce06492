//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Write string catalogs next to each Go source file
//! - `rewrite`: Wrap translatable literals in `T(...)` and generate `i18n_init.go`
//! - `init`: Initialize i18nize configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::Rewrite(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by extract and rewrite.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source directory (or single .go file) to process
    #[arg(short = 'd', long = "directory", default_value = ".")]
    pub directory: PathBuf,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// JSON file listing strings to exclude (overrides config file)
    #[arg(short = 'e', long = "exclude")]
    pub excluded_strings_file: Option<PathBuf>,

    /// Catalog locale suffix (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Also write an annotated .po catalog per file
    #[arg(long)]
    pub po: bool,

    /// Do not catalog _test.go files
    #[arg(long)]
    pub skip_test_files: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Parser)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write rewritten sources to this directory instead of in place
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Translation function name (overrides config file)
    #[arg(long)]
    pub wrapper: Option<String>,

    /// Go import path of the translation runtime (overrides config file)
    #[arg(long)]
    pub runtime_package: Option<String>,
}

#[derive(Debug, Args)]
pub struct RewriteCommand {
    #[command(flatten)]
    pub args: RewriteArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into per-file JSON catalogs
    Extract(ExtractCommand),
    /// Wrap translatable strings in translation calls
    Rewrite(RewriteCommand),
    /// Initialize a new .i18nizerc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
