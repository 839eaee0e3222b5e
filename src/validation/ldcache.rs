//! Dynamic-load presence check against the linker cache.
//!
//! Libraries loaded via `dlopen` never show up in static link inspection,
//! so their presence is checked against the output of the dynamic-linker
//! cache listing instead. The check is supplementary, not authoritative:
//! if the listing tool fails, nothing is reported missing (fail-open),
//! so a benign tool failure cannot become a false positive.

use crate::shell;
use std::ffi::OsStr;
use std::path::Path;

/// Outcome of checking dynamically-loaded libraries against the cache.
///
/// Both subsets are reported so the aggregator can amend its missing set
/// explicitly: presence removes a name, absence inserts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicLoadCheck {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

/// Check `libraries` against `ldconfig -p`.
pub fn check_dynamic_libraries(libraries: &[&str]) -> DynamicLoadCheck {
    check_with_tool(libraries, Path::new("ldconfig"))
}

/// Check `libraries` against the cache listing produced by `tool -p`.
///
/// An empty input list skips the cache query entirely.
pub fn check_with_tool(libraries: &[&str], tool: &Path) -> DynamicLoadCheck {
    if libraries.is_empty() {
        return DynamicLoadCheck::default();
    }

    let listing = match shell::run_capture(tool, &[OsStr::new("-p")], None, &[]) {
        Ok(out) if out.success => out.stdout,
        Ok(out) => {
            tracing::debug!(code = ?out.exit_code, "linker cache listing failed, assuming nothing is missing");
            return DynamicLoadCheck::default();
        }
        Err(err) => {
            tracing::debug!(%err, "linker cache listing unavailable, assuming nothing is missing");
            return DynamicLoadCheck::default();
        }
    };

    let haystack = listing.to_lowercase();
    let mut check = DynamicLoadCheck::default();
    for library in libraries {
        if haystack.contains(&library.to_lowercase()) {
            check.present.push((*library).to_string());
        } else {
            check.missing.push((*library).to_string());
        }
    }
    check
}
