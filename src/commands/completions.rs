//! Shell completions command
//!
//! The shell itself is validated by clap (the argument is a value enum), so
//! an unsupported shell never reaches this point.

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Write a completion script for the requested shell to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, bin_name, &mut std::io::stdout().lock());
    Ok(())
}
