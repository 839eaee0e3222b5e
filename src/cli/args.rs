//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::catalog::DependencyGroup;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// hostdeps - Native dependency validation for bundled browser binaries.
#[derive(Debug, Parser)]
#[command(name = "hostdeps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the host has the native libraries a binary bundle needs
    Validate(ValidateArgs),

    /// Install the native dependencies for the requested groups
    InstallDeps(InstallDepsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Directory containing the binaries to check
    pub dir: PathBuf,

    /// Dependency group the directory belongs to
    #[arg(short, long, value_enum, default_value_t = DependencyGroup::Chromium)]
    pub group: DependencyGroup,

    /// Extra directory appended to the library search path while probing
    /// (repeatable)
    #[arg(long, value_name = "DIR")]
    pub search_dir: Vec<PathBuf>,

    /// Command name recommended in remediation messages
    #[arg(long, default_value = "hostdeps", hide = true)]
    pub helper: String,
}

/// Arguments for the `install-deps` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallDepsArgs {
    /// Groups to install (defaults to all)
    #[arg(value_enum)]
    pub groups: Vec<DependencyGroup>,

    /// Print the package-manager commands without executing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
