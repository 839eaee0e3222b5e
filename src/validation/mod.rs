//! Native dependency validation pipeline.
//!
//! Data flows strictly scanner → prober (+ dynamic-load checker) →
//! aggregator → classifier. The platform-specific pieces come in through
//! the [`PlatformPolicy`](crate::platform::PlatformPolicy) selected at
//! startup; everything here is platform-neutral plumbing.

pub mod aggregator;
pub mod ldcache;
pub mod outcome;
pub mod prober;
pub mod scanner;

pub use outcome::ValidationOutcome;

use crate::catalog::{Catalog, DependencyGroup};
use crate::error::{HostdepsError, Result};
use crate::platform::{PlatformPolicy, RemediationContext};
use crate::ui;
use std::path::PathBuf;

/// Settings for one validation run.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// Directory holding the binaries to check.
    pub directory: PathBuf,
    /// Dependency group the directory belongs to.
    pub group: DependencyGroup,
    /// Extra directories appended to the linker search path while probing.
    pub search_dirs: Vec<PathBuf>,
    /// Install-helper command name used in remediation messages.
    pub helper: String,
}

impl ValidationRequest {
    /// A request probing `directory` with itself as the only extra search
    /// directory.
    pub fn new(directory: impl Into<PathBuf>, group: DependencyGroup) -> Self {
        let directory = directory.into();
        Self {
            search_dirs: vec![directory.clone()],
            directory,
            group,
            helper: "hostdeps".to_string(),
        }
    }
}

/// Run the scan→probe→aggregate→classify pipeline for one directory.
pub fn validate(
    request: &ValidationRequest,
    policy: &dyn PlatformPolicy,
    catalog: &Catalog,
) -> Result<ValidationOutcome> {
    let candidates = scanner::scan_binaries(&request.directory, policy)?;
    tracing::debug!(
        count = candidates.len(),
        directory = %request.directory.display(),
        "collected binary candidates"
    );

    let prober = policy.prober(&request.search_dirs);
    let mut missing = aggregator::collect_missing(&candidates, prober.as_ref());

    let dynamic =
        policy.check_dynamic_libraries(policy.dynamic_load_libraries(request.group));
    aggregator::merge_dynamic_load(&mut missing, &dynamic);

    if !missing.is_empty() {
        tracing::debug!(missing = ?missing, "unsatisfied dependencies after aggregation");
    }

    let ctx = RemediationContext {
        helper: request.helper.clone(),
    };
    Ok(policy.classify(&missing, catalog, &ctx))
}

/// Render an outcome: satisfied is silent, an unsupported platform warns on
/// the diagnostic stream, missing dependencies on a supported platform
/// become a hard error carrying the remediation text.
pub fn report(outcome: ValidationOutcome) -> Result<()> {
    match outcome {
        ValidationOutcome::Satisfied => Ok(()),
        ValidationOutcome::WarnedUnsupportedPlatform { blocks } => {
            ui::warn(&blocks.join("\n"));
            Ok(())
        }
        ValidationOutcome::FatalMissingDependencies { blocks } => {
            Err(HostdepsError::MissingDependencies {
                message: blocks.join("\n"),
            })
        }
    }
}
