//! Report formatting and printing utilities.
//!
//! Displays what a conversion run did in a compact, cargo-style format.
//! Separate from core logic so ts2json can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ConvertSummary, InitSummary};
use super::exit_status::ExitStatus;
use crate::config::CONFIG_FILE_NAME;
use crate::core::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Convert(summary) => print_convert(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Exit status a result maps to.
pub fn exit_status(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Convert(summary) => match &summary.run {
            Some(run) if run.is_clean() => ExitStatus::Success,
            Some(_) => ExitStatus::Failure,
            None => ExitStatus::Success,
        },
        CommandSummary::Init(summary) => {
            if summary.created {
                ExitStatus::Success
            } else {
                ExitStatus::Failure
            }
        }
    }
}

fn print_convert<W: Write>(summary: &ConvertSummary, verbose: bool, writer: &mut W) {
    if let Some(root) = &summary.missing_root {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("Folder does not exist: {}", root.display()).red()
        );
        return;
    }
    let Some(run) = &summary.run else {
        return;
    };

    if run.dirs_found == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            "No translation directories found"
        );
        return;
    }

    for (path, err) in &run.failures {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            FAILURE_MARK.red(),
            path.display(),
            err
        );
    }

    if verbose {
        for path in &run.files_written {
            let _ = writeln!(writer, "{} wrote {}", SUCCESS_MARK.green(), path.display());
        }
    }

    let _ = writeln!(writer, "{}", summary_line(run));
}

fn summary_line(run: &RunSummary) -> String {
    let converted = format!(
        "Converted {} {} ({} {} written)",
        run.modules_converted,
        if run.modules_converted == 1 {
            "module"
        } else {
            "modules"
        },
        run.files_written.len(),
        if run.files_written.len() == 1 {
            "file"
        } else {
            "files"
        }
    );
    if run.is_clean() {
        format!("{} {}", SUCCESS_MARK.green(), converted.green())
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{}, {} failed",
                converted,
                run.failures.len()
            )
            .red()
        )
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
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
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}
