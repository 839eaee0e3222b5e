//! Platform policies.
//!
//! Linux and Windows share one scan→probe→aggregate pipeline but diverge
//! entirely in naming conventions, probing tools, and classification. That
//! divergence lives behind [`PlatformPolicy`], selected once at startup
//! from the detected OS, rather than in conditionals spread through the
//! pipeline.

pub mod linux;
pub mod windows;

pub use linux::LinuxPolicy;
pub use windows::WindowsPolicy;

use crate::catalog::{Catalog, DependencyGroup};
use crate::error::{HostdepsError, Result};
use crate::validation::ldcache::DynamicLoadCheck;
use crate::validation::outcome::ValidationOutcome;
use crate::validation::prober::DependencyProber;
use crate::validation::scanner::ScanRules;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Caller-supplied context for composing remediation messages.
#[derive(Debug, Clone)]
pub struct RemediationContext {
    /// Name of the install-helper command recommended to the user.
    pub helper: String,
}

impl Default for RemediationContext {
    fn default() -> Self {
        Self {
            helper: "hostdeps".to_string(),
        }
    }
}

/// Platform-specific behavior behind the shared validation pipeline.
pub trait PlatformPolicy: ScanRules + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Catalog key for this host (e.g. `ubuntu22.04`), when known.
    fn platform_id(&self) -> Option<String>;

    /// Build the link-inspection prober for this platform.
    fn prober(&self, search_dirs: &[PathBuf]) -> Box<dyn DependencyProber>;

    /// Libraries `group` loads at runtime via `dlopen`; empty off Linux.
    fn dynamic_load_libraries(&self, group: DependencyGroup) -> &'static [&'static str];

    /// Check dynamic-load libraries against the linker cache; a no-op off
    /// Linux.
    fn check_dynamic_libraries(&self, libraries: &[&str]) -> DynamicLoadCheck;

    /// Map the aggregated missing set onto a remediation decision.
    fn classify(
        &self,
        missing: &BTreeSet<String>,
        catalog: &Catalog,
        ctx: &RemediationContext,
    ) -> ValidationOutcome;
}

/// Select the policy for the running OS. Done once at startup.
pub fn detect() -> Result<Box<dyn PlatformPolicy>> {
    if cfg!(windows) {
        Ok(Box::new(WindowsPolicy::detect()))
    } else if cfg!(target_os = "linux") {
        Ok(Box::new(LinuxPolicy::detect()))
    } else {
        Err(HostdepsError::UnsupportedPlatform {
            message: format!(
                "no native dependency validation policy for {}",
                std::env::consts::OS
            ),
        })
    }
}
