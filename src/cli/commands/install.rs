//! The `install-deps` command.

use crate::catalog::Catalog;
use crate::cli::args::InstallDepsArgs;
use crate::error::Result;
use crate::installer::{self, InstallRequest};
use crate::ui;

pub fn run(args: &InstallDepsArgs, quiet: bool) -> Result<()> {
    let catalog = Catalog::load()?;
    let request = if args.groups.is_empty() {
        InstallRequest::all(args.dry_run)
    } else {
        InstallRequest {
            groups: args.groups.clone(),
            dry_run: args.dry_run,
        }
    };

    installer::install(&request, &catalog)?;
    if !args.dry_run && !quiet {
        ui::success("Native dependencies installed.");
    }
    Ok(())
}
