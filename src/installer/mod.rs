//! Native dependency installation.
//!
//! Resolves the requested dependency groups to concrete package-manager
//! commands and runs them (or prints them in dry-run mode). This path
//! shares the catalog lookup with validation but none of the probing
//! pipeline. A non-zero exit from the package manager is an error on both
//! platforms.

use crate::catalog::{Catalog, DependencyGroup};
use crate::error::Result;
use crate::host::distro;
use crate::shell::{self, CommandLine};
use crate::ui;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A requested set of dependency groups plus the dry-run flag. One call,
/// no retained state.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub groups: Vec<DependencyGroup>,
    pub dry_run: bool,
}

impl InstallRequest {
    /// Request covering every group.
    pub fn all(dry_run: bool) -> Self {
        Self {
            groups: DependencyGroup::ALL.to_vec(),
            dry_run,
        }
    }
}

/// Install (or print) the native dependencies for the requested groups.
pub fn install(request: &InstallRequest, catalog: &Catalog) -> Result<()> {
    if cfg!(windows) {
        run_all(&[windows_install_command()], request.dry_run)
    } else {
        install_linux(request, catalog)
    }
}

fn install_linux(request: &InstallRequest, catalog: &Catalog) -> Result<()> {
    let Some(platform_id) = distro::detect().map(|d| d.platform_id()) else {
        ui::warn("Cannot determine the Linux distribution; skipping dependency installation.");
        return Ok(());
    };

    let Some(packages) = catalog.packages_for(&platform_id, &request.groups) else {
        ui::warn(&format!(
            "No dependency information for {platform_id}; skipping dependency installation."
        ));
        return Ok(());
    };

    if packages.is_empty() {
        tracing::debug!(platform = %platform_id, "no packages to install");
        return Ok(());
    }

    let commands = apt_commands(&packages, shell::is_elevated());
    run_all(&commands, request.dry_run)
}

/// `apt-get update` followed by the install command, each wrapped with the
/// elevation prefix when not already running as root.
pub fn apt_commands(packages: &BTreeSet<String>, elevated: bool) -> Vec<CommandLine> {
    let update = CommandLine::new("apt-get", ["update"]);
    let mut install_args = vec![
        "install".to_string(),
        "-y".to_string(),
        "--no-install-recommends".to_string(),
    ];
    install_args.extend(packages.iter().cloned());
    let install = CommandLine::new("apt-get", install_args);

    [update, install]
        .into_iter()
        .map(|cmd| if elevated { cmd } else { cmd.elevated("sudo") })
        .collect()
}

/// The bundled PowerShell script, run under a bypassed execution policy.
fn windows_install_command() -> CommandLine {
    let script = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("scripts").join("install_media_pack.ps1")))
        .unwrap_or_else(|| PathBuf::from("scripts/install_media_pack.ps1"));
    CommandLine::new(
        "powershell.exe",
        [
            "-ExecutionPolicy".to_string(),
            "Bypass".to_string(),
            "-File".to_string(),
            script.to_string_lossy().to_string(),
        ],
    )
}

fn run_all(commands: &[CommandLine], dry_run: bool) -> Result<()> {
    for command in commands {
        if dry_run {
            println!("{}", command.rendered());
            continue;
        }
        tracing::info!(command = %command.rendered(), "running");
        command.run_inherit()?;
    }
    Ok(())
}
