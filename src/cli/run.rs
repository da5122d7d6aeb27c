use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::CommandResult;
use super::commands::{convert::convert, init::init};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
