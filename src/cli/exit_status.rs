use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for batch
/// tools.
///
/// - `Success` (0): Command completed, every module converted
/// - `Failure` (1): Command completed but some modules failed
/// - `Error` (2): Command failed due to internal error (config error, bad usage)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, every module converted.
    Success,
    /// Command completed but some modules failed to convert.
    Failure,
    /// Command failed due to internal error (config error, bad usage).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
