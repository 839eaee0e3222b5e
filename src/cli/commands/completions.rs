//! The `completions` command.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use clap::CommandFactory;

pub fn run(args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "hostdeps", &mut std::io::stdout());
    Ok(())
}
