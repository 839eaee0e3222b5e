//! Command dispatch.

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

use super::{completions, install, validate};

/// Dispatch the parsed CLI to its command handler.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Validate(args) => validate::run(args, cli.quiet, cli.verbose),
        Commands::InstallDeps(args) => install::run(args, cli.quiet),
        Commands::Completions(args) => completions::run(args),
    }
}
