//! The `validate` command.

use crate::catalog::Catalog;
use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::platform;
use crate::ui;
use crate::validation::{self, ValidationRequest};

pub fn run(args: &ValidateArgs, quiet: bool, verbose: bool) -> Result<()> {
    let catalog = Catalog::load()?;
    let policy = platform::detect()?;
    tracing::debug!(policy = policy.name(), group = %args.group, "validating host requirements");
    if verbose && !quiet {
        ui::note(&format!(
            "Checking {} binaries under {}",
            args.group,
            args.dir.display()
        ));
    }

    let mut request = ValidationRequest::new(args.dir.clone(), args.group);
    request.search_dirs.extend(args.search_dir.iter().cloned());
    request.helper.clone_from(&args.helper);

    let outcome = validation::validate(&request, policy.as_ref(), &catalog)?;
    if outcome.is_satisfied() && !quiet {
        ui::success(&format!(
            "All native dependencies for {} are satisfied.",
            args.group
        ));
    }
    validation::report(outcome)
}
