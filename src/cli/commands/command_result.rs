use std::path::PathBuf;

use crate::core::RunSummary;

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// What a conversion run actually did, for reporting.
pub enum CommandSummary {
    Convert(ConvertSummary),
    Init(InitSummary),
}

/// Conversion counters plus the root-missing special case: a missing root
/// is reported and performs no conversions, but never fails the process.
pub struct ConvertSummary {
    pub run: Option<RunSummary>,
    pub missing_root: Option<PathBuf>,
}

/// Result of running a ts2json command.
pub struct CommandResult {
    pub summary: CommandSummary,
}
