//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `convert`: Scan for translation directories and convert their modules
//! - `init`: Initialize a ts2json configuration file

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
            Some(Command::Convert(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Output folder for generated JSON files (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Project root to scan for translation directories
    #[arg(default_value = ".")]
    pub root: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Sub-path suffix that marks a translation directory (overrides config)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Restrict scanning to these sub-paths of the root
    /// Can be specified multiple times: --scan-root feature-libs --scan-root projects
    #[arg(long = "scan-root")]
    pub scan_roots: Vec<String>,

    /// Ignore aggregator index.ts files and convert every module
    #[arg(long)]
    pub no_index: bool,

    /// Also write each JSON file next to its source module
    #[arg(long)]
    pub alongside: bool,

    /// Rewrite aggregator imports to point at the generated JSON files
    #[arg(long)]
    pub rewrite_index: bool,

    /// Delete source modules after successful conversion
    #[arg(long)]
    pub delete_source: bool,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    #[command(flatten)]
    pub args: ConvertArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert TypeScript translation modules to JSON files
    Convert(ConvertCommand),
    /// Initialize a new .ts2jsonrc.json configuration file
    Init,
}
